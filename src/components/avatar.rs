//! Author avatar.

use maud::{html, Markup, Render};

/// Rounded, bordered author picture. Only the image reference is needed.
#[derive(Debug, Clone)]
pub struct Avatar<'a> {
    pub src: &'a str,
}

impl<'a> Avatar<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self { src }
    }
}

impl Render for Avatar<'_> {
    fn render(&self) -> Markup {
        html! {
            img class="avatar avatar-bordered" src=(self.src) alt="" loading="lazy";
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_renders_source() {
        let html = Avatar::new("https://example.com/a.jpg").render().into_string();
        assert!(html.contains(r#"src="https://example.com/a.jpg""#));
        assert!(html.contains("avatar-bordered"));
    }
}
