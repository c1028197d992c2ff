use common::theme::ThemeStore;
use web_sys::Storage;

/// [`ThemeStore`] over `window.localStorage`. Reads and writes are no-ops
/// when storage is unavailable (private mode, disabled cookies).
#[derive(Debug, Clone, Default)]
pub struct LocalStorageThemeStore;

impl LocalStorageThemeStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("could not persist {}={}", key, value);
                }
            }
            None => log::warn!("localStorage is not available"),
        }
    }
}
