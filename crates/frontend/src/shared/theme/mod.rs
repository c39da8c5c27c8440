//! Display theme preference for the form.
//!
//! A single light/dark switch, persisted in localStorage so the choice
//! survives the next attach.

use leptos::prelude::*;
use web_sys::window;

const DARK_MODE_STORAGE_KEY: &str = "nobi-form-dark-mode";

/// Parse the stored flag; anything but "true" means light
fn parse_flag(value: &str) -> bool {
    value == "true"
}

fn flag_str(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Load the dark-mode flag from localStorage
pub fn load_dark_mode() -> bool {
    get_local_storage()
        .and_then(|storage| storage.get_item(DARK_MODE_STORAGE_KEY).ok().flatten())
        .map(|s| parse_flag(&s))
        .unwrap_or(false)
}

/// Save the dark-mode flag to localStorage
pub fn save_dark_mode(enabled: bool) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(DARK_MODE_STORAGE_KEY, flag_str(enabled));
    }
}

/// Light/dark toggle button
#[component]
pub fn ThemeToggle(dark_mode: RwSignal<bool>) -> impl IntoView {
    let toggle = move |_| {
        dark_mode.update(|d| *d = !*d);
        save_dark_mode(dark_mode.get_untracked());
    };

    view! {
        <button
            type="button"
            class="btn btn-link theme-toggle"
            on:click=toggle
            title="Toggle dark mode"
        >
            {move || if dark_mode.get() { "☀ Light" } else { "☾ Dark" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_round_trip() {
        assert!(parse_flag(flag_str(true)));
        assert!(!parse_flag(flag_str(false)));
    }

    #[test]
    fn test_unknown_flag_is_light() {
        assert!(!parse_flag(""));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("TRUE"));
    }
}
