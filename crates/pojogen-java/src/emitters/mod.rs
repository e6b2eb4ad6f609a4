pub mod class;
pub mod enums;

use minijinja::{AutoEscape, Environment};

use crate::error::JavaError;

pub const CLASS_TEMPLATE: &str = "class.java.j2";
pub const ENUM_TEMPLATE: &str = "enum.java.j2";
pub const CONSTANTS_TEMPLATE: &str = "constants.java.j2";

/// Build the template environment shared by every emitter.
pub fn environment() -> Result<Environment<'static>, JavaError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template(CLASS_TEMPLATE, include_str!("../../templates/class.java.j2"))?;
    env.add_template(ENUM_TEMPLATE, include_str!("../../templates/enum.java.j2"))?;
    env.add_template(
        CONSTANTS_TEMPLATE,
        include_str!("../../templates/constants.java.j2"),
    )?;
    Ok(env)
}

const JSON_PROPERTY: &str = "com.fasterxml.jackson.annotation.JsonProperty";
const JSON_INCLUDE: &str = "com.fasterxml.jackson.annotation.JsonInclude";
