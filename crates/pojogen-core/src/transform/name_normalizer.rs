/// Convert a schema name to a type identifier.
///
/// The first character and every character following a `-` or `_` is
/// upper-cased, then all `-` and `_` are dropped. Other characters keep their
/// case, so already upper-camel input is returned unchanged.
///
/// - `user_id` → `UserId`
/// - `pet-store` → `PetStore`
/// - `HTTPStatus` → `HTTPStatus`
pub fn to_upper_camel(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len());
    let mut i = 0;

    if let Some(&first) = chars.first()
        && is_word(first)
    {
        result.push(first.to_ascii_uppercase());
        i = 1;
    }

    while i < chars.len() {
        let ch = chars[i];
        match chars.get(i + 1) {
            Some(&next) if is_separator(ch) && is_word(next) => {
                result.push(next.to_ascii_uppercase());
                i += 2;
            }
            _ => {
                result.push(ch);
                i += 1;
            }
        }
    }

    result.retain(|c| !is_separator(c));
    result
}

/// Convert a property name to a field identifier: [`to_upper_camel`] with the
/// first character lower-cased.
pub fn to_lower_camel(name: &str) -> String {
    let upper = to_upper_camel(name);
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character only (`userId` → `UserId`), for accessor names.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn an enum literal into a constant identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_` and the result is
/// upper-cased. A leading digit gets a `_` prefix and an empty literal becomes
/// `UNNAMED`.
pub fn to_constant_name(literal: &str) -> String {
    let mut result: String = literal
        .chars()
        .map(|c| {
            if is_word(c) {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if result.is_empty() {
        return "UNNAMED".to_string();
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_'
}
