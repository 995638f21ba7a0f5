//! Boilerplate files written by `init` and `update`.

pub const GLOBAL_CONTEXT: &str = "00-global-context.spec.md";
pub const ARCHITECTURE: &str = "00-architecture.spec.md";
pub const STACK: &str = "00-stack.spec.md";
pub const CHECKLIST: &str = "checklist.md";
pub const DEFAULT_TEMPLATE: &str = "template-default.spec.md";
pub const RULES_FILE: &str = ".cursorrules";
pub const README_FILE: &str = "README.md";

/// Source of boilerplate file contents.
pub trait TemplateProvider {
    /// Contents of the spec-directory template `name`, if known.
    fn get(&self, name: &str) -> Option<&'static str>;

    /// Files copied into a project's `specs/` directory, in copy order.
    fn spec_template_names(&self) -> &[&'static str];

    /// Project rules file (`.cursorrules`).
    fn rules(&self) -> &'static str;

    fn readme(&self) -> &'static str;
}

/// Templates compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

const SPEC_TEMPLATES: [(&str, &str); 5] = [
    (
        GLOBAL_CONTEXT,
        include_str!("../templates/00-global-context.spec.md"),
    ),
    (
        ARCHITECTURE,
        include_str!("../templates/00-architecture.spec.md"),
    ),
    (STACK, include_str!("../templates/00-stack.spec.md")),
    (CHECKLIST, include_str!("../templates/checklist.md")),
    (
        DEFAULT_TEMPLATE,
        include_str!("../templates/template-default.spec.md"),
    ),
];

const SPEC_TEMPLATE_NAMES: [&str; 5] = [
    GLOBAL_CONTEXT,
    ARCHITECTURE,
    STACK,
    CHECKLIST,
    DEFAULT_TEMPLATE,
];

impl TemplateProvider for EmbeddedTemplates {
    fn get(&self, name: &str) -> Option<&'static str> {
        SPEC_TEMPLATES
            .iter()
            .find(|(template, _)| *template == name)
            .map(|(_, content)| *content)
    }

    fn spec_template_names(&self) -> &[&'static str] {
        &SPEC_TEMPLATE_NAMES
    }

    fn rules(&self) -> &'static str {
        include_str!("../templates/.cursorrules")
    }

    fn readme(&self) -> &'static str {
        include_str!("../templates/README.md")
    }
}

#[cfg(test)]
#[path = "templates_tests.rs"]
mod tests;
