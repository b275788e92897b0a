//! Navigation types.

use std::fmt;

/// The top-level tabs of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Directory,
    Jobs,
    Events,
    Donations,
    Stories,
    Profile,
}

impl Tab {
    /// Tabs in navigation order. `Profile` is only shown when logged in.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Directory,
        Self::Jobs,
        Self::Events,
        Self::Donations,
        Self::Stories,
        Self::Profile,
    ];

    /// Label on the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Directory => "Directory",
            Self::Jobs => "Jobs",
            Self::Events => "Events",
            Self::Donations => "Donations",
            Self::Stories => "Success Stories",
            Self::Profile => "Profile",
        }
    }

    /// Tabs shown on the navigation bar for the given login state.
    pub fn visible(logged_in: bool) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |tab| logged_in || *tab != Self::Profile)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A select value that is either "no filter" or one concrete option.
///
/// Used by the type and category pick lists, whose first entry ("All Types",
/// "All Categories") clears the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Any(&'static str),
    Only(T),
}

impl<T: Copy> Choice<T> {
    /// The "any" entry followed by every option.
    pub fn options(any_label: &'static str, all: &[T]) -> Vec<Self> {
        std::iter::once(Self::Any(any_label))
            .chain(all.iter().copied().map(Self::Only))
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any(label) => f.write_str(label),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T: fmt::Display> Choice<T> {
    /// Filter value sent to the backend; empty for [`Choice::Any`].
    pub fn filter_value(&self) -> String {
        match self {
            Self::Any(_) => String::new(),
            Self::Only(value) => value.to_string(),
        }
    }
}
