//! Project category labels and link icons.

/// Reserved category meaning "no filter".
pub const ALL_CATEGORY: &str = "all";

/// Button label for the unfiltered view.
pub const ALL_CATEGORY_LABEL: &str = "All Projects";

/// Display label for a project category. Unknown categories show as-is.
pub fn category_label(category: &str) -> &str {
    match category {
        ALL_CATEGORY => ALL_CATEGORY_LABEL,
        "academic" => "Academic",
        "github" => "Portfolio",
        other => other,
    }
}

/// Inline icons used on project links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkIcon {
    GitHub,
    Document,
}

impl LinkIcon {
    pub fn svg(&self) -> &'static str {
        match self {
            LinkIcon::GitHub => r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><path fill="currentColor" d="M12 0C5.37 0 0 5.37 0 12c0 5.3 3.44 9.79 8.2 11.39.6.11.82-.26.82-.58 0-.29-.01-1.07-.02-2.09-3.34.73-4.04-1.61-4.04-1.61-.55-1.39-1.34-1.76-1.34-1.76-1.1-.76.08-.74.08-.74 1.22.09 1.86 1.25 1.86 1.25 1.08 1.85 2.83 1.32 3.52 1.01.11-.78.42-1.32.76-1.62-2.67-.3-5.47-1.34-5.47-5.98 0-1.32.47-2.39 1.25-3.24-.13-.3-.54-1.53.12-3.18 0 0 1.02-.33 3.34 1.24.97-.27 2-.41 3.03-.41s2.06.14 3.03.41c2.32-1.57 3.34-1.24 3.34-1.24.66 1.65.24 2.88.12 3.18.78.85 1.25 1.92 1.25 3.24 0 4.65-2.81 5.68-5.49 5.98.43.37.82 1.1.82 2.22 0 1.6-.01 2.89-.01 3.29 0 .32.21.7.83.58C20.56 21.79 24 17.3 24 12 24 5.37 18.63 0 12 0z"/></svg>"#,
            LinkIcon::Document => r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M12 3v10"/><path d="M8 11l4 4 4-4"/><path d="M5 21h14a2 2 0 0 0 2-2v-3H3v3a2 2 0 0 0 2 2z"/></svg>"#,
        }
    }
}
