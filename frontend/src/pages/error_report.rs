use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorReportProps {
    pub error: AttrValue,
    #[prop_or_default]
    pub cause: Option<AttrValue>,
}

/// Full-screen report shown instead of the app when it cannot start.
pub struct ErrorReport;

impl Component for ErrorReport {
    type Message = ();
    type Properties = ErrorReportProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="error-report">
                <div class="error-report-body">
                    <h1>{ ":(" }</h1>
                    <h2>{ "Algo salió mal" }</h2>
                    <br />
                    <p>{ props.error.clone() }</p>
                    {
                        match &props.cause {
                            Some(cause) => html! {
                                <>
                                    <h3>{ "Razón" }</h3>
                                    <p>{ cause.clone() }</p>
                                </>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        }
    }
}
