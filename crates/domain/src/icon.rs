//! Icon lookup for stat variants and the other widgets.
//!
//! Icons are referenced by Font Awesome class name only; the glyph assets
//! are provided by the host page's stylesheet.

use crate::variant::StatVariant;

/// A glyph a widget can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Icon {
    ProjectDiagram,
    Clock,
    UserClock,
    ClipboardCheck,
    #[default]
    ChartBar,
    Search,
    Calendar,
    Download,
    User,
    Envelope,
    Spinner,
}

impl Icon {
    /// The icon shown for a stat variant.
    #[must_use]
    pub fn for_variant(variant: StatVariant) -> Self {
        match variant {
            StatVariant::TotalProjects => Self::ProjectDiagram,
            StatVariant::RecentProjects => Self::Clock,
            StatVariant::PendingAssignment => Self::UserClock,
            StatVariant::InEvaluation => Self::ClipboardCheck,
        }
    }

    /// Resolve an arbitrary variant key, falling back to [`Icon::default`]
    /// for keys outside [`StatVariant`].
    #[must_use]
    pub fn resolve(key: &str) -> Self {
        match key.parse::<StatVariant>() {
            Ok(variant) => Self::for_variant(variant),
            Err(_) => {
                tracing::debug!(key, "no icon mapped for variant, using default");
                Self::default()
            }
        }
    }

    /// Font Awesome class for this glyph.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::ProjectDiagram => "fa-project-diagram",
            Self::Clock => "fa-clock",
            Self::UserClock => "fa-user-clock",
            Self::ClipboardCheck => "fa-clipboard-check",
            Self::ChartBar => "fa-chart-bar",
            Self::Search => "fa-search",
            Self::Calendar => "fa-calendar-alt",
            Self::Download => "fa-download",
            Self::User => "fa-user",
            Self::Envelope => "fa-envelope",
            Self::Spinner => "fa-spinner",
        }
    }

    /// Full class attribute for an `<i>` element.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("fas {}", self.class_name())
    }
}
