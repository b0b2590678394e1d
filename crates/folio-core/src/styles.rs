//! Declarative styles
//!
//! The page-wide stylesheet is static data, rendered to CSS once on first
//! use and shared for the life of the process. Per-instance presentation
//! (a reveal target's current look) is an inline [`RevealStyle`] value and
//! never touches the shared sheet.

use once_cell::sync::Lazy;

/// `@keyframes` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframes {
    /// Animation name
    pub name: &'static str,
    /// `(selector, declarations)` pairs, e.g. `("from", "opacity: 0;")`
    pub steps: &'static [(&'static str, &'static str)],
}

/// Plain selector rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Selector
    pub selector: &'static str,
    /// Declarations, each terminated by `;`
    pub declarations: &'static str,
}

/// The page stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    /// Animations
    pub keyframes: Vec<Keyframes>,
    /// Utility classes
    pub rules: Vec<StyleRule>,
}

impl StyleSheet {
    /// Look up a rule by selector
    #[must_use]
    pub fn rule(&self, selector: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.selector == selector)
    }

    /// Look up keyframes by name
    #[must_use]
    pub fn animation(&self, name: &str) -> Option<&Keyframes> {
        self.keyframes.iter().find(|k| k.name == name)
    }

    /// Render to CSS text
    #[must_use]
    pub fn render(&self) -> String {
        let mut css = String::new();
        for keyframes in &self.keyframes {
            css.push_str(&format!("@keyframes {} {{\n", keyframes.name));
            for (step, declarations) in keyframes.steps {
                css.push_str(&format!("  {step} {{ {declarations} }}\n"));
            }
            css.push_str("}\n");
        }
        for rule in &self.rules {
            css.push_str(&format!("{} {{ {} }}\n", rule.selector, rule.declarations));
        }
        css
    }
}

static STYLESHEET: Lazy<StyleSheet> = Lazy::new(|| StyleSheet {
    keyframes: vec![
        Keyframes {
            name: "blob",
            steps: &[
                ("0%, 100%", "transform: translate(0, 0) scale(1);"),
                ("30%", "transform: translate(30px, -50px) scale(1.1);"),
                ("60%", "transform: translate(-20px, 30px) scale(0.9);"),
            ],
        },
        Keyframes {
            name: "fadeInDown",
            steps: &[
                ("from", "opacity: 0; transform: translateY(-20px);"),
                ("to", "opacity: 1; transform: translateY(0);"),
            ],
        },
        Keyframes {
            name: "fadeInUp",
            steps: &[
                ("from", "opacity: 0; transform: translateY(20px);"),
                ("to", "opacity: 1; transform: translateY(0);"),
            ],
        },
    ],
    rules: vec![
        StyleRule { selector: ".animate-blob", declarations: "animation: blob 7s infinite;" },
        StyleRule { selector: ".animation-delay-2000", declarations: "animation-delay: 2s;" },
        StyleRule { selector: ".animation-delay-4000", declarations: "animation-delay: 4s;" },
        StyleRule { selector: ".animate-fadeInDown", declarations: "animation: fadeInDown 0.8s ease-out;" },
        StyleRule { selector: ".delay-300", declarations: "animation-delay: 0.3s;" },
        StyleRule {
            selector: ".animate-fadeInUp",
            declarations: "animation: fadeInUp 0.8s ease-out 0.3s forwards; opacity: 0;",
        },
        StyleRule { selector: ".delay-500", declarations: "animation-delay: 0.5s;" },
        StyleRule { selector: ".transition-max-height", declarations: "transition-property: max-height, opacity;" },
        StyleRule {
            selector: ".shadow-primary-lg",
            declarations: "box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.5), \
                           0 4px 6px -2px rgba(59, 130, 246, 0.05);",
        },
        StyleRule { selector: ".text-secondary-400", declarations: "color: #fb923c;" },
        StyleRule { selector: ".bg-secondary-500", declarations: "background-color: #f97316;" },
        StyleRule { selector: ".bg-accent-500", declarations: "background-color: #10b981;" },
        StyleRule { selector: ".text-primary-400", declarations: "color: #60a5fa;" },
    ],
});

static STYLESHEET_CSS: Lazy<String> = Lazy::new(|| STYLESHEET.render());

/// The shared page stylesheet
#[inline]
#[must_use]
pub fn stylesheet() -> &'static StyleSheet {
    &STYLESHEET
}

/// The shared stylesheet as CSS, rendered once
#[inline]
#[must_use]
pub fn stylesheet_css() -> &'static str {
    &STYLESHEET_CSS
}

/// CSS transition timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Duration (ms)
    pub duration_ms: u32,
    /// Start delay (ms)
    pub delay_ms: u32,
    /// Easing function
    pub easing: String,
}

/// Inline presentation of a reveal target
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    /// 0.0 hidden, 1.0 revealed
    pub opacity: f64,
    /// Vertical offset (px)
    pub translate_y_px: f64,
    /// Timing for the opacity/transform transition
    pub transition: Transition,
}

impl RevealStyle {
    /// Render as an inline `style` attribute value
    #[must_use]
    pub fn to_inline_css(&self) -> String {
        let Transition { duration_ms, delay_ms, easing } = &self.transition;
        format!(
            "opacity: {}; transform: translateY({}px); \
             transition: opacity {duration_ms}ms {easing} {delay_ms}ms, \
             transform {duration_ms}ms {easing} {delay_ms}ms;",
            self.opacity, self.translate_y_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_renders_once_and_contains_keyframes() {
        let a = stylesheet_css();
        let b = stylesheet_css();
        assert!(std::ptr::eq(a, b));
        assert!(a.contains("@keyframes fadeInUp {"));
        assert!(a.contains(".animate-blob { animation: blob 7s infinite; }"));
    }

    #[test]
    fn lookups() {
        assert!(stylesheet().animation("blob").is_some());
        assert_eq!(
            stylesheet().rule(".text-primary-400").map(|r| r.declarations),
            Some("color: #60a5fa;")
        );
        assert!(stylesheet().rule(".missing").is_none());
    }

    #[test]
    fn inline_css() {
        let style = RevealStyle {
            opacity: 0.0,
            translate_y_px: 20.0,
            transition: Transition {
                duration_ms: 800,
                delay_ms: 150,
                easing: "ease-out".to_string(),
            },
        };
        assert_eq!(
            style.to_inline_css(),
            "opacity: 0; transform: translateY(20px); \
             transition: opacity 800ms ease-out 150ms, transform 800ms ease-out 150ms;"
        );
    }
}
