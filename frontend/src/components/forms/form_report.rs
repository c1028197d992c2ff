use common::report::{FormReport, ReportKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FormReportProps {
    #[prop_or_default]
    pub report: Option<FormReport>,
}

/// Outcome panel under a form: status line, description and the backend's
/// detail on failures. Renders nothing until there is a report.
pub struct FormReportView;

impl Component for FormReportView {
    type Message = ();
    type Properties = FormReportProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(report) = &ctx.props().report else {
            return html! {};
        };

        let class = match report.kind {
            ReportKind::Success => "report report-success",
            ReportKind::Error => "report report-error",
        };

        match &report.response {
            Some(response) => html! {
                <div {class}>
                    <div class="report-status">
                        <h2>{ response.status.to_string() }</h2>
                        <h3>{ response.status_text.clone() }</h3>
                        <span>{ "/" }</span>
                        <h5>{ report.desc.clone() }</h5>
                    </div>
                    {
                        match &response.detail {
                            Some(detail) => html! { <p class="report-detail">{ detail.clone() }</p> },
                            None => html! {},
                        }
                    }
                </div>
            },
            None => html! {
                <div {class}>
                    <h5>{ report.desc.clone() }</h5>
                </div>
            },
        }
    }
}
