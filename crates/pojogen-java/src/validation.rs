use pojogen_core::config::ValidationApi;
use pojogen_core::ir::{Constraints, PropertyKind, PropertyNode};
use pojogen_core::parse::schema::Exclusivity;
use pojogen_core::transform::name_normalizer::to_lower_camel;

const UUID_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

const IPV4_PATTERN: &str =
    r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$";

const IPV6_PATTERN: &str = concat!(
    "([0-9a-fA-F]{1,4}:){7,7}[0-9a-fA-F]{1,4}|",
    "([0-9a-fA-F]{1,4}:){1,7}:|",
    "([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}|",
    "([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}|",
    "([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}|",
    "([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}|",
    "([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}|",
    "[0-9a-fA-F]{1,4}:((:[0-9a-fA-F]{1,4}){1,6})|",
    ":((:[0-9a-fA-F]{1,4}){1,7}|:)|",
    "fe80:(:[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]{1,}|",
    r"::(ffff(:0{1,4}){0,1}:){0,1}((25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}(25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])|",
    r"([0-9a-fA-F]{1,4}:){1,4}:((25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}(25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])",
);

/// The constraint annotations a field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    NotNull,
    Size,
    Pattern,
    Email,
    UniqueElements,
    Min,
    Max,
    DecimalMin,
    DecimalMax,
}

impl Constraint {
    pub fn simple_name(self) -> &'static str {
        match self {
            Constraint::NotNull => "NotNull",
            Constraint::Size => "Size",
            Constraint::Pattern => "Pattern",
            Constraint::Email => "Email",
            Constraint::UniqueElements => "UniqueElements",
            Constraint::Min => "Min",
            Constraint::Max => "Max",
            Constraint::DecimalMin => "DecimalMin",
            Constraint::DecimalMax => "DecimalMax",
        }
    }

    /// Fully qualified class name to import.
    pub fn import(self, api: ValidationApi) -> String {
        match self {
            Constraint::UniqueElements => {
                "org.hibernate.validator.constraints.UniqueElements".to_string()
            }
            other => format!(
                "{}.validation.constraints.{}",
                api.namespace(),
                other.simple_name()
            ),
        }
    }
}

/// One constraint annotation with its arguments, which are already Java
/// expressions, and its message.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationDirective {
    pub constraint: Constraint,
    pub arguments: Vec<(&'static str, String)>,
    pub message: String,
}

impl ValidationDirective {
    fn new(constraint: Constraint, message: String) -> Self {
        Self {
            constraint,
            arguments: Vec::new(),
            message,
        }
    }

    fn arg(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.arguments.push((key, value.into()));
        self
    }

    /// The annotation source, e.g. `@Size(max = 5, message = "...")`.
    pub fn annotation(&self) -> String {
        let mut parts: Vec<String> = self
            .arguments
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect();
        parts.push(format!("message = \"{}\"", escape_java(&self.message)));
        format!("@{}({})", self.constraint.simple_name(), parts.join(", "))
    }
}

/// Constraint directives for one field, in emission order: presence, string
/// checks, array checks, numeric bounds.
pub fn directives(name: &str, prop: &PropertyNode, required: bool) -> Vec<ValidationDirective> {
    let field = to_lower_camel(name);
    let c = &prop.constraints;
    let mut out = Vec::new();

    if required {
        out.push(ValidationDirective::new(
            Constraint::NotNull,
            format!("{field} is required"),
        ));
    }

    match &prop.kind {
        PropertyKind::String { format } => {
            string_directives(&field, c, format.as_deref(), &mut out)
        }
        PropertyKind::Array { .. } => array_directives(&field, c, &mut out),
        PropertyKind::Integer { .. } | PropertyKind::Number { .. } => {
            numeric_directives(&field, c, &mut out)
        }
        _ => {}
    }

    out
}

fn string_directives(
    field: &str,
    c: &Constraints,
    format: Option<&str>,
    out: &mut Vec<ValidationDirective>,
) {
    let size = match (c.min_length, c.max_length) {
        (Some(min), Some(max)) => Some(
            ValidationDirective::new(
                Constraint::Size,
                format!("{field} must be between {min} and {max} characters"),
            )
            .arg("min", min.to_string())
            .arg("max", max.to_string()),
        ),
        (Some(min), None) => Some(
            ValidationDirective::new(
                Constraint::Size,
                format!("{field} must be at least {min} characters"),
            )
            .arg("min", min.to_string()),
        ),
        (None, Some(max)) => Some(
            ValidationDirective::new(
                Constraint::Size,
                format!("{field} cannot be longer than {max} characters"),
            )
            .arg("max", max.to_string()),
        ),
        (None, None) => None,
    };
    out.extend(size);

    if let Some(pattern) = c.pattern.as_deref().filter(|p| !p.is_empty()) {
        out.push(pattern_directive(
            pattern,
            format!("{field} must match the pattern: {pattern}"),
        ));
    }

    match format {
        Some("email") => out.push(ValidationDirective::new(
            Constraint::Email,
            format!("{field} must be a valid email address"),
        )),
        Some("uuid") => out.push(pattern_directive(
            UUID_PATTERN,
            format!("{field} must be a valid UUID"),
        )),
        Some("ipv4") => out.push(pattern_directive(
            IPV4_PATTERN,
            format!("{field} must be a valid IPv4 address"),
        )),
        Some("ipv6") => out.push(pattern_directive(
            IPV6_PATTERN,
            format!("{field} must be a valid IPv6 address"),
        )),
        _ => {}
    }
}

fn pattern_directive(regexp: &str, message: String) -> ValidationDirective {
    ValidationDirective::new(Constraint::Pattern, message)
        .arg("regexp", format!("\"{}\"", escape_java(regexp)))
}

fn array_directives(field: &str, c: &Constraints, out: &mut Vec<ValidationDirective>) {
    let size = match (c.min_items, c.max_items) {
        (Some(min), Some(max)) => Some(
            ValidationDirective::new(
                Constraint::Size,
                format!("{field} must contain between {min} and {max} items"),
            )
            .arg("min", min.to_string())
            .arg("max", max.to_string()),
        ),
        (Some(min), None) => Some(
            ValidationDirective::new(
                Constraint::Size,
                format!("{field} must contain at least {min} items"),
            )
            .arg("min", min.to_string()),
        ),
        (None, Some(max)) => Some(
            ValidationDirective::new(
                Constraint::Size,
                format!("{field} cannot contain more than {max} items"),
            )
            .arg("max", max.to_string()),
        ),
        (None, None) => None,
    };
    out.extend(size);

    if c.unique_items {
        out.push(ValidationDirective::new(
            Constraint::UniqueElements,
            format!("{field} must not contain duplicates"),
        ));
    }
}

fn numeric_directives(field: &str, c: &Constraints, out: &mut Vec<ValidationDirective>) {
    let strict_minimum = matches!(c.exclusive_minimum, Some(Exclusivity::Flag(true)));
    if let Some(minimum) = c.minimum {
        out.push(if strict_minimum {
            strict_bound(Constraint::DecimalMin, minimum, field, "greater than")
        } else {
            inclusive_bound(Constraint::Min, minimum, field, "at least")
        });
    }
    if let Some(Exclusivity::Bound(bound)) = c.exclusive_minimum {
        out.push(strict_bound(Constraint::DecimalMin, bound, field, "greater than"));
    }

    let strict_maximum = matches!(c.exclusive_maximum, Some(Exclusivity::Flag(true)));
    if let Some(maximum) = c.maximum {
        out.push(if strict_maximum {
            strict_bound(Constraint::DecimalMax, maximum, field, "less than")
        } else {
            inclusive_bound(Constraint::Max, maximum, field, "at most")
        });
    }
    if let Some(Exclusivity::Bound(bound)) = c.exclusive_maximum {
        out.push(strict_bound(Constraint::DecimalMax, bound, field, "less than"));
    }
}

/// `@Min`/`@Max` for integral bounds. `@Min` only takes a `long`, so a
/// fractional bound, or one outside the `long` range, falls back to the
/// inclusive decimal form.
fn inclusive_bound(constraint: Constraint, value: f64, field: &str, phrase: &str) -> ValidationDirective {
    let message = format!("{field} must be {phrase} {value}");
    match long_literal(value) {
        Some(literal) => ValidationDirective::new(constraint, message).arg("value", literal),
        None => {
            let decimal = match constraint {
                Constraint::Min => Constraint::DecimalMin,
                _ => Constraint::DecimalMax,
            };
            ValidationDirective::new(decimal, message).arg("value", format!("\"{value}\""))
        }
    }
}

/// A Java integer literal for a whole bound: plain inside the `int` range,
/// `L`-suffixed inside the `long` range.
fn long_literal(value: f64) -> Option<String> {
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    let whole = value as i64;
    Some(if i32::try_from(whole).is_ok() {
        whole.to_string()
    } else {
        format!("{whole}L")
    })
}

fn strict_bound(constraint: Constraint, value: f64, field: &str, phrase: &str) -> ValidationDirective {
    ValidationDirective::new(constraint, format!("{field} must be {phrase} {value}"))
        .arg("value", format!("\"{value}\""))
        .arg("inclusive", "false")
}

/// Escape text for a Java string literal.
pub fn escape_java(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
