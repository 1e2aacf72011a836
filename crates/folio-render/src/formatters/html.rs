use std::fmt::{self, Write};

/// Display adapter that HTML-escapes its content on the fly.
///
/// Every interpolation in the views goes through this, except values typed
/// as `TrustedHtml`.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// Escape text into an owned string
pub fn escape(text: &str) -> String {
    Escaped(text).to_string()
}
