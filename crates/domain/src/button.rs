//! Button styling.

/// Colour scheme of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Outline,
}

impl ButtonVariant {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// HTML `type` of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Text shown in place of the children while a button is loading.
pub const LOADING_TEXT: &str = "Cargando\u{2026}";

/// Static styling choices of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
}

impl ButtonStyle {
    /// Class attribute, e.g. `button button-primary button-loading`.
    #[must_use]
    pub fn class(&self, loading: bool) -> String {
        let mut classes = vec!["button".to_string(), format!("button-{}", self.variant.as_str())];
        match self.size {
            ButtonSize::Small => classes.push("button-small".to_string()),
            ButtonSize::Medium => {}
            ButtonSize::Large => classes.push("button-large".to_string()),
        }
        if self.full_width {
            classes.push("button-full-width".to_string());
        }
        if loading {
            classes.push("button-loading".to_string());
        }
        classes.join(" ")
    }
}

/// A loading button is never clickable.
#[must_use]
pub fn is_inert(disabled: bool, loading: bool) -> bool {
    disabled || loading
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_primary_medium() {
        assert_eq!(ButtonStyle::default().class(false), "button button-primary");
    }

    #[test]
    fn should_append_size_width_and_loading_modifiers() {
        let style = ButtonStyle {
            variant: ButtonVariant::Danger,
            size: ButtonSize::Small,
            full_width: true,
        };
        assert_eq!(
            style.class(true),
            "button button-danger button-small button-full-width button-loading"
        );
    }

    #[test]
    fn should_be_inert_while_loading() {
        assert!(is_inert(false, true));
        assert!(is_inert(true, false));
        assert!(!is_inert(false, false));
    }

    #[test]
    fn should_default_type_to_button() {
        assert_eq!(ButtonType::default().as_str(), "button");
        assert_eq!(ButtonType::Submit.as_str(), "submit");
    }
}
