//! Font descriptor for Pango text layout.

/// Font selection passed to every text draw call.
///
/// Sizes are supplied per call so the same descriptor serves the title,
/// labels and the toggle button.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Cantarell", "Noto Sans")
    pub family: String,

    /// Font weight ("normal", "bold", "light" ...)
    pub weight: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Sans", "normal")
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
        }
    }

    /// Same family, bold weight. Used for headings.
    pub fn bold(&self) -> Self {
        Self {
            family: self.family.clone(),
            weight: "bold".to_string(),
        }
    }

    /// Pango font description string, e.g. `"Sans Bold 24"`.
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", size.round() as i32));
        parts.join(" ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
