//! `--set key=value` assignments
//!
//! Assignments go through the same control change handlers a UI would use,
//! so option keys, lenient numbers and overlay rebuilds behave identically.

use anyhow::{bail, Context, Result};
use proplab_app::Playground;
use proplab_controls::{BoundControl, ControlInput, ControlWidget};

/// Parse `key=value` for clap
pub fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing property name in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Control input for a raw value, shaped by the control's widget
pub fn input_for(control: &BoundControl, raw: &str) -> Result<ControlInput> {
    let input = match &control.widget {
        ControlWidget::Toggle => match raw.trim() {
            "true" | "on" | "yes" => ControlInput::Checked(true),
            "false" | "off" | "no" => ControlInput::Checked(false),
            other => bail!("'{}' expects true or false, got '{}'", control.key, other),
        },
        ControlWidget::Choice { multiple: true, .. } if raw.contains(',') => {
            ControlInput::SelectMany(raw.split(',').map(|key| key.trim().to_string()).collect())
        }
        ControlWidget::Choice { .. } => ControlInput::Select(raw.trim().to_string()),
        ControlWidget::Number { .. } | ControlWidget::Text { .. } => {
            ControlInput::Input(raw.to_string())
        }
    };
    Ok(input)
}

/// Apply assignments in order; each sees the bag left by the previous one
pub fn apply(playground: &mut Playground, assignments: &[(String, String)]) -> Result<()> {
    for (key, raw) in assignments {
        let control = playground
            .controls()
            .into_iter()
            .find(|control| control.key.as_str() == key.as_str());
        let Some(control) = control else {
            let id = playground.selected().unwrap_or_default();
            bail!(
                "'{}' has no control on {} (unknown, or hidden by the current settings)",
                key,
                id
            );
        };

        let input = input_for(&control, raw)?;
        tracing::debug!("--set {}={} as {}", key, raw, input.kind_name());
        playground
            .try_edit(key, input)
            .with_context(|| format!("Failed to set {}", key))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proplab_core::PropValue;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("color=secondary"),
            Ok(("color".to_string(), "secondary".to_string()))
        );
        assert_eq!(
            parse_assignment("children=a=b"),
            Ok(("children".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_assignment("text="), Ok(("text".to_string(), String::new())));
        assert!(parse_assignment("color").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn test_apply_routes_through_controls() {
        let registry = proplab_catalog::builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("Button");

        let assignments = [
            ("disabled".to_string(), "true".to_string()),
            ("interactive".to_string(), "true".to_string()),
            ("trigger".to_string(), "hover".to_string()),
        ];
        apply(&mut playground, &assignments).unwrap();

        let props = playground.props();
        assert_eq!(props.get("disabled"), Some(&PropValue::from(true)));
        let overlay = props.get("overlay").and_then(PropValue::as_overlay).unwrap();
        assert_eq!(overlay.trigger, "hover");
    }

    #[test]
    fn test_apply_multi_select() {
        let registry = proplab_catalog::builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("TreeView");
        apply(
            &mut playground,
            &[("selectableTypes".to_string(), "folder, file".to_string())],
        )
        .unwrap();
        assert_eq!(
            playground.props().get("selectableTypes"),
            Some(&PropValue::list(["folder", "file"]))
        );
    }

    #[test]
    fn test_apply_rejects_hidden_and_bad_values() {
        let registry = proplab_catalog::builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("Button");

        let hidden = [("trigger".to_string(), "hover".to_string())];
        assert!(apply(&mut playground, &hidden).is_err());

        let bad = [("disabled".to_string(), "maybe".to_string())];
        assert!(apply(&mut playground, &bad).is_err());
    }
}
