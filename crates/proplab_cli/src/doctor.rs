//! Doctor command - audit the component registry
//!
//! Builds the built-in registry, checks every component's defaults against
//! its schema, and makes sure each one yields controls and a stable code
//! preview.

use proplab_app::Playground;
use proplab_codegen::CodeSerializer;
use proplab_core::{AuditFinding, Registry, Severity};

use crate::config::ProplabConfig;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";

/// Outcome of a check, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStatus {
    NotApplicable,
    Ok,
    Warning,
    Error,
}

impl CheckStatus {
    fn glyph(self) -> &'static str {
        match self {
            CheckStatus::NotApplicable => "-",
            CheckStatus::Ok => "✓",
            CheckStatus::Warning => "!",
            CheckStatus::Error => "✗",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            CheckStatus::NotApplicable => "\x1b[90m",
            CheckStatus::Ok => "\x1b[32m",
            CheckStatus::Warning => "\x1b[33m",
            CheckStatus::Error => "\x1b[31m",
        }
    }
}

/// ANSI styling, switched off by `display.color = false`
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn wrap(&self, ansi: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", ansi, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn icon(&self, status: CheckStatus) -> String {
        self.wrap(status.ansi(), status.glyph())
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            hint: None,
        }
    }

    fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }
}

/// Named group of checks, reported together
pub struct CheckCategory {
    pub name: String,
    pub checks: Vec<CheckResult>,
}

impl CheckCategory {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Worst status among the checks; skipped checks count as passing
    pub fn status(&self) -> CheckStatus {
        self.checks
            .iter()
            .map(|check| check.status)
            .max()
            .map_or(CheckStatus::Ok, |worst| worst.max(CheckStatus::Ok))
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|check| check.status == status).count()
    }
}

/// Run all doctor checks
pub fn run_doctor(config: &ProplabConfig) -> Vec<CheckCategory> {
    let mut categories = Vec::new();

    let mut registry_checks = CheckCategory::new("Registry");
    let registry = match proplab_catalog::builtin_registry() {
        Ok(registry) => {
            registry_checks.add(CheckResult::new(
                "Built-in catalog",
                CheckStatus::Ok,
                format!("{} components registered", registry.len()),
            ));
            Some(registry)
        }
        Err(err) => {
            registry_checks.add(
                CheckResult::new("Built-in catalog", CheckStatus::Error, err.to_string())
                    .with_hint("Fix the descriptor reported above; the registry refuses to load"),
            );
            None
        }
    };
    categories.push(registry_checks);

    categories.push(check_configuration(config, registry.as_ref()));

    if let Some(registry) = &registry {
        categories.push(check_components(registry));
        categories.push(check_code_previews(registry, config));
    }

    categories
}

fn check_configuration(config: &ProplabConfig, registry: Option<&Registry>) -> CheckCategory {
    let mut category = CheckCategory::new("Configuration");

    category.add(match &config.source {
        Some(path) => CheckResult::new("Config file", CheckStatus::Ok, path.display().to_string()),
        None => CheckResult::new(
            "Config file",
            CheckStatus::NotApplicable,
            "no proplab.toml found, using defaults",
        ),
    });

    category.add(match (&config.playground.default_component, registry) {
        (Some(id), Some(registry)) if !registry.contains(id) => CheckResult::new(
            "Default component",
            CheckStatus::Warning,
            format!("'{}' is not a registered component", id),
        )
        .with_hint("Run `proplab list` to see the available ids"),
        (Some(id), _) => CheckResult::new("Default component", CheckStatus::Ok, id.as_str()),
        (None, _) => CheckResult::new("Default component", CheckStatus::NotApplicable, "not set"),
    });

    category
}

/// One check per component, from its audit findings
fn check_components(registry: &Registry) -> CheckCategory {
    let mut category = CheckCategory::new("Components");
    let findings = registry.audit();

    for descriptor in registry.iter() {
        let own: Vec<&AuditFinding> = findings
            .iter()
            .filter(|f| f.component == descriptor.id && f.severity > Severity::Info)
            .collect();

        let worst = own.iter().map(|f| f.severity).max();
        let details = own
            .iter()
            .map(|f| format!("{}: {}", f.key, f.message))
            .collect::<Vec<_>>()
            .join("; ");

        let check = match worst {
            Some(Severity::Error) => CheckResult::new(&descriptor.id, CheckStatus::Error, details)
                .with_hint("The registry will not build until this is fixed"),
            Some(_) => CheckResult::new(&descriptor.id, CheckStatus::Warning, details)
                .with_hint("Align the default with the schema or add a schema entry"),
            None => CheckResult::new(
                &descriptor.id,
                CheckStatus::Ok,
                format!(
                    "{} properties, {} defaults",
                    descriptor.schema.len(),
                    descriptor.defaults.len()
                ),
            ),
        };
        category.add(check);
    }

    category
}

/// Every component must produce controls and a deterministic code preview
fn check_code_previews(registry: &Registry, config: &ProplabConfig) -> CheckCategory {
    let mut category = CheckCategory::new("Previews");
    let serializer = CodeSerializer::with_options(registry, config.serializer_options());
    let mut playground = Playground::with_options(registry, config.serializer_options());

    let mut unstable = Vec::new();
    let mut empty = Vec::new();
    for id in registry.component_ids() {
        playground.select(id);
        if playground.controls().is_empty() {
            empty.push(id);
        }
        let first = serializer.serialize(id, playground.props());
        let second = serializer.serialize(id, playground.props());
        if first != second || first.is_empty() {
            unstable.push(id);
        }
    }

    category.add(if empty.is_empty() {
        CheckResult::new(
            "Controls",
            CheckStatus::Ok,
            "every component has editable properties",
        )
    } else {
        CheckResult::new(
            "Controls",
            CheckStatus::Warning,
            format!("no controls for {}", empty.join(", ")),
        )
        .with_hint("Add schema entries so the component can be edited")
    });

    category.add(if unstable.is_empty() {
        CheckResult::new("Code preview", CheckStatus::Ok, "deterministic for every component")
    } else {
        CheckResult::new(
            "Code preview",
            CheckStatus::Error,
            format!("unstable output for {}", unstable.join(", ")),
        )
        .with_hint("Check the component's structural strategy")
    });

    category
}

/// Print the report, one block per category, then a one-line verdict
pub fn print_doctor_results(categories: &[CheckCategory], palette: Palette) {
    println!("{}", palette.wrap(BOLD, "Proplab Doctor"));
    println!();

    for category in categories {
        println!(
            "{} {}",
            palette.icon(category.status()),
            palette.wrap(BOLD, &category.name)
        );
        for check in &category.checks {
            println!("  {} {}: {}", palette.icon(check.status), check.name, check.message);
            if let Some(hint) = &check.hint {
                println!("      {}", palette.wrap(CYAN, &format!("hint: {}", hint)));
            }
        }
        println!();
    }

    println!("{}", verdict(categories, palette));
}

fn verdict(categories: &[CheckCategory], palette: Palette) -> String {
    let errors: usize = categories.iter().map(|c| c.count(CheckStatus::Error)).sum();
    let warnings: usize = categories.iter().map(|c| c.count(CheckStatus::Warning)).sum();

    match (errors, warnings) {
        (0, 0) => palette.wrap(CheckStatus::Ok.ansi(), "catalog is consistent"),
        (0, w) => palette.wrap(CheckStatus::Warning.ansi(), &format!("{} warning(s)", w)),
        (e, w) => palette.wrap(
            CheckStatus::Error.ansi(),
            &format!("{} error(s), {} warning(s)", e, w),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_healthy() {
        let categories = run_doctor(&ProplabConfig::default());
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Registry", "Configuration", "Components", "Previews"]);
        for category in &categories {
            assert_ne!(category.status(), CheckStatus::Error, "{}", category.name);
        }
        assert_eq!(categories[2].checks.len(), 15);
    }

    #[test]
    fn test_unknown_default_component_warns() {
        let mut config = ProplabConfig::default();
        config.playground.default_component = Some("Carousel".to_string());
        let categories = run_doctor(&config);
        let configuration = &categories[1];
        assert_eq!(configuration.status(), CheckStatus::Warning);
    }

    #[test]
    fn test_palette_without_color() {
        let plain = Palette::new(false);
        assert_eq!(plain.icon(CheckStatus::Ok), "✓");
        assert_eq!(plain.icon(CheckStatus::Error), "✗");
        assert!(Palette::new(true).icon(CheckStatus::Warning).contains("\x1b[33m"));
    }

    #[test]
    fn test_category_status_takes_worst() {
        let mut category = CheckCategory::new("Configuration");
        category.add(CheckResult::new("Config file", CheckStatus::NotApplicable, "none"));
        assert_eq!(category.status(), CheckStatus::Ok);

        category.add(CheckResult::new("Default component", CheckStatus::Warning, "x"));
        category.add(CheckResult::new("Default component", CheckStatus::Ok, "y"));
        assert_eq!(category.status(), CheckStatus::Warning);
        assert_eq!(CheckCategory::new("Empty").status(), CheckStatus::Ok);
    }

    #[test]
    fn test_verdict_counts() {
        let plain = Palette::new(false);
        let mut category = CheckCategory::new("Previews");
        category.add(CheckResult::new("Controls", CheckStatus::Ok, "fine"));
        assert_eq!(verdict(std::slice::from_ref(&category), plain), "catalog is consistent");

        category.add(CheckResult::new("Controls", CheckStatus::Warning, "sparse"));
        category.add(CheckResult::new("Code preview", CheckStatus::Error, "unstable"));
        assert_eq!(
            verdict(std::slice::from_ref(&category), plain),
            "1 error(s), 1 warning(s)"
        );
    }
}
