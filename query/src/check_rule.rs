use serde::Deserialize;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// A named boolean expression evaluated against the query engine.
#[derive(Deserialize, Debug)]
pub struct CheckRule {
    pub name: String,
    /// Expected outcome; when absent, any boolean result passes.
    #[serde(default)]
    pub expect: Option<bool>,
    pub expr: String,
}

/// The outcome of running a single check rule.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: String,
    /// The evaluated boolean, or the propagated evaluation error.
    pub result: Result<bool, String>,
    /// Whether the result met the rule's expectation.
    pub passed: bool,
}

pub async fn read_check_rules_from_file(
    path: &str,
) -> Result<Vec<CheckRule>, Box<dyn std::error::Error>> {
    let mut file = File::open(path).await?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).await?;
    let check_rules: Vec<CheckRule> = serde_yaml::from_str(&contents)?;
    Ok(check_rules)
}

/// Runs each rule's expression through the engine.
///
/// Evaluation errors are captured per rule; one malformed expression
/// never prevents the remaining rules from running.
pub fn run_check_rules(engine: &rhai::Engine, rules: &[CheckRule]) -> Vec<CheckOutcome> {
    rules
        .iter()
        .map(|rule| {
            let result = engine
                .eval::<bool>(&rule.expr)
                .map_err(|err| err.to_string());
            debug!("check '{}' evaluated to {:?}", rule.name, result);
            let passed = match (&result, rule.expect) {
                (Ok(value), Some(expected)) => *value == expected,
                (Ok(_), None) => true,
                (Err(_), _) => false,
            };
            CheckOutcome {
                name: rule.name.clone(),
                result,
                passed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_engine;

    #[tokio::test]
    async fn test_read_check_rules_from_file() {
        let rules = read_check_rules_from_file("../checks.yaml").await.unwrap();
        assert_eq!(rules.len(), 4);
    }

    #[test]
    fn test_parse_check_rules_from_yaml() {
        let yaml_data = r#"
        - name: loopback
          expect: true
          expr: ip_belongs_to_network("127.0.0.1", "127.0.0.0/8")
        - name: unchecked
          expr: ip_belongs_to_network("10.0.0.1", "10.0.0.0/8")
        "#;
        let rules: Vec<CheckRule> = serde_yaml::from_str(yaml_data).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].name, "loopback");
        assert_eq!(rules[0].expect, Some(true));
        assert_eq!(rules[1].expect, None);
    }

    #[test]
    fn test_run_check_rules_outcomes() {
        let engine = build_engine();
        let rules = vec![
            CheckRule {
                name: "member".to_string(),
                expect: Some(true),
                expr: r#"ip_belongs_to_network("10.10.0.12", "10.10.0.0/8")"#.to_string(),
            },
            CheckRule {
                name: "missed expectation".to_string(),
                expect: Some(true),
                expr: r#"ip_belongs_to_network("192.168.1.10", "10.10.0.0/8")"#.to_string(),
            },
            CheckRule {
                name: "no expectation".to_string(),
                expect: None,
                expr: r#"ip_belongs_to_network("192.168.1.10", "10.10.0.0/8")"#.to_string(),
            },
            CheckRule {
                name: "malformed".to_string(),
                expect: Some(false),
                expr: r#"ip_belongs_to_network("10.10.0.256", "10.10.0.0/24")"#.to_string(),
            },
        ];

        let outcomes = run_check_rules(&engine, &rules);
        assert_eq!(outcomes.len(), 4);

        assert_eq!(outcomes[0].result, Ok(true));
        assert!(outcomes[0].passed);

        assert_eq!(outcomes[1].result, Ok(false));
        assert!(!outcomes[1].passed);

        assert_eq!(outcomes[2].result, Ok(false));
        assert!(outcomes[2].passed);

        assert!(!outcomes[3].passed);
        let err = outcomes[3].result.as_ref().unwrap_err();
        assert!(err.contains("Invalid IP or network format"));
    }
}
