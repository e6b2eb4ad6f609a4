use std::collections::BTreeSet;

use minijinja::{Environment, context};
use pojogen_core::config::GenerationOptions;
use pojogen_core::ir::{PropertyNode, SchemaNode};
use pojogen_core::transform::ResolvedSchema;
use pojogen_core::transform::name_normalizer::{capitalize, to_lower_camel};

use super::{CLASS_TEMPLATE, JSON_INCLUDE, JSON_PROPERTY};
use crate::error::JavaError;
use crate::type_mapper::map_field_type;
use crate::validation::{directives, escape_java};

/// Lines of the pretty-printed source schema kept in the header comment.
const EXCERPT_LINES: usize = 10;

/// Java keywords and literals that cannot name a field.
const RESERVED: [&str; 53] = [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

const LOMBOK: [(&str, &str); 4] = [
    ("@Data", "lombok.Data"),
    ("@Builder", "lombok.Builder"),
    ("@AllArgsConstructor", "lombok.AllArgsConstructor"),
    ("@NoArgsConstructor", "lombok.NoArgsConstructor"),
];

/// One emitted field declaration.
struct Field {
    name: String,
    property: String,
    java_type: String,
    annotations: Vec<String>,
}

impl Field {
    fn to_ctx(&self) -> minijinja::Value {
        context! {
            name => self.name,
            property => self.property,
            java_type => self.java_type,
            annotations => self.annotations,
        }
    }
}

/// Emit a Java class for a resolved object schema.
///
/// `schema_name` is the document name used in the header comment;
/// `class_name` is the qualified type name including any role suffix.
pub fn emit_class(
    env: &Environment<'_>,
    options: &GenerationOptions,
    schema_name: &str,
    class_name: &str,
    schema: &SchemaNode,
    resolved: &ResolvedSchema<'_>,
) -> Result<String, JavaError> {
    let mut imports = BTreeSet::new();
    let mut annotations = Vec::new();

    if options.use_lombok {
        for (annotation, import) in LOMBOK {
            annotations.push(annotation.to_string());
            imports.insert(import.to_string());
        }
        annotations.push("@Generated(\"pojogen\")".to_string());
        imports.insert(format!(
            "{}.annotation.Generated",
            options.validation_api.namespace()
        ));
    }
    if options.use_jackson {
        annotations.push("@JsonInclude(JsonInclude.Include.NON_NULL)".to_string());
        imports.insert(JSON_INCLUDE.to_string());
    }

    let fields: Vec<Field> = resolved
        .fields
        .iter()
        .map(|(name, prop)| field(name, prop, resolved.is_required(name), options, &mut imports))
        .collect();

    let accessors: &[Field] = if !options.use_lombok && options.generate_helpers {
        &fields
    } else {
        &[]
    };

    let tmpl = env.get_template(CLASS_TEMPLATE)?;
    Ok(tmpl.render(context! {
        package => options.package_name,
        imports => imports,
        schema => schema_name,
        excerpt => excerpt(schema_name, schema)?,
        annotations => annotations,
        name => class_name,
        fields => fields.iter().map(Field::to_ctx).collect::<Vec<_>>(),
        accessors => accessors.iter().map(Field::to_ctx).collect::<Vec<_>>(),
    })?)
}

fn field(
    name: &str,
    prop: &PropertyNode,
    required: bool,
    options: &GenerationOptions,
    imports: &mut BTreeSet<String>,
) -> Field {
    let optional = options.use_optional && !required;
    let java_type = map_field_type(&prop.kind, options, optional);
    imports.extend(java_type.imports);

    let mut annotations = Vec::new();
    if options.use_validation_annotations {
        for directive in directives(name, prop, required) {
            imports.insert(directive.constraint.import(options.validation_api));
            annotations.push(directive.annotation());
        }
    }
    if options.use_jackson {
        imports.insert(JSON_PROPERTY.to_string());
        annotations.push(format!("@JsonProperty(\"{}\")", escape_java(name)));
    }

    let field_name = java_identifier(&to_lower_camel(name));
    Field {
        property: capitalize(&field_name),
        name: field_name,
        java_type: java_type.name,
        annotations,
    }
}

/// Make a property name usable as a Java field name. Characters outside the
/// identifier set become `_`; a reserved word or a leading digit gets a `_`
/// prefix.
fn java_identifier(name: &str) -> String {
    let ident: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    match ident.chars().next() {
        None => "_".to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{ident}"),
        Some(_) if RESERVED.contains(&ident.as_str()) => format!("_{ident}"),
        Some(_) => ident,
    }
}

/// The first lines of the source schema as pretty JSON, safe inside a block
/// comment.
fn excerpt(name: &str, schema: &SchemaNode) -> Result<Vec<String>, JavaError> {
    let pretty = serde_json::to_string_pretty(&schema.source).map_err(|source| {
        JavaError::Excerpt {
            name: name.to_string(),
            source,
        }
    })?;
    Ok(pretty
        .lines()
        .take(EXCERPT_LINES)
        .map(|line| line.replace("*/", "*\\/"))
        .collect())
}

#[cfg(test)]
mod tests {
    use pojogen_core::transform::{load, resolve_schema};
    use serde_json::json;

    use super::*;
    use crate::emitters::environment;

    fn render(options: &GenerationOptions, definitions: serde_json::Value, name: &str) -> String {
        let doc = load(&json!({"swagger": "2.0", "definitions": definitions})).unwrap();
        let resolved = resolve_schema(name, &doc.schemas).unwrap();
        let env = environment().unwrap();
        emit_class(
            &env,
            options,
            name,
            name,
            doc.schema(name).unwrap(),
            &resolved,
        )
        .unwrap()
    }

    fn minimal() -> GenerationOptions {
        GenerationOptions {
            use_jackson: false,
            use_validation_annotations: false,
            generate_helpers: false,
            ..GenerationOptions::default()
        }
    }

    #[test]
    fn test_minimal_class() {
        let code = render(
            &minimal(),
            json!({"Point": {"properties": {"x": {"type": "integer"}, "y": {"type": "integer"}}}}),
            "Point",
        );
        assert_eq!(
            code,
            concat!(
                "package com.example.model;\n",
                "\n",
                "/*\n",
                " Original schema: Point\n",
                " {\n",
                "   \"properties\": {\n",
                "     \"x\": {\n",
                "       \"type\": \"integer\"\n",
                "     },\n",
                "     \"y\": {\n",
                "       \"type\": \"integer\"\n",
                "     }\n",
                "   }\n",
                " }\n",
                "*/\n",
                "public class Point {\n",
                "\n",
                "    private Integer x;\n",
                "\n",
                "    private Integer y;\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_excerpt_is_truncated_and_escaped() {
        let code = render(
            &minimal(),
            json!({"Note": {
                "description": "ends */ early",
                "properties": {
                    "a": {"type": "string"},
                    "b": {"type": "string"},
                    "c": {"type": "string"},
                    "d": {"type": "string"}
                }
            }}),
            "Note",
        );
        assert!(code.contains("ends *\\/ early"));
        let start = code.find("/*\n").unwrap();
        let end = code.find("\n*/").unwrap();
        // Title line plus the excerpt
        assert_eq!(code[start..end].lines().count(), 2 + EXCERPT_LINES);
        assert_eq!(code.matches("*/").count(), 1);
    }

    #[test]
    fn test_accessors() {
        let options = GenerationOptions {
            generate_helpers: true,
            ..minimal()
        };
        let code = render(
            &options,
            json!({"User": {"properties": {"user_id": {"type": "integer", "format": "int64"}}}}),
            "User",
        );
        assert!(code.contains("    private Long userId;\n"));
        assert!(code.ends_with(concat!(
            "    private Long userId;\n",
            "\n",
            "    public Long getUserId() {\n",
            "        return userId;\n",
            "    }\n",
            "\n",
            "    public void setUserId(Long userId) {\n",
            "        this.userId = userId;\n",
            "    }\n",
            "}\n",
        )));
    }

    #[test]
    fn test_lombok_suppresses_accessors() {
        let options = GenerationOptions {
            use_lombok: true,
            generate_helpers: true,
            ..minimal()
        };
        let code = render(
            &options,
            json!({"User": {"properties": {"name": {"type": "string"}}}}),
            "User",
        );
        assert!(code.contains(
            "@Data\n@Builder\n@AllArgsConstructor\n@NoArgsConstructor\n@Generated(\"pojogen\")\npublic class User {"
        ));
        assert!(code.contains("import jakarta.annotation.Generated;\n"));
        assert!(code.contains("import lombok.AllArgsConstructor;\nimport lombok.Builder;\n"));
        assert!(!code.contains("getName"));
    }

    #[test]
    fn test_jackson_and_validation() {
        let options = GenerationOptions::default();
        let code = render(
            &options,
            json!({"Customer": {
                "required": ["email"],
                "properties": {
                    "email": {"type": "string", "format": "email"},
                    "tags": {"type": "array", "items": {"type": "string"}, "uniqueItems": true}
                }
            }}),
            "Customer",
        );
        assert!(code.contains(concat!(
            "import com.fasterxml.jackson.annotation.JsonInclude;\n",
            "import com.fasterxml.jackson.annotation.JsonProperty;\n",
            "import jakarta.validation.constraints.Email;\n",
            "import jakarta.validation.constraints.NotNull;\n",
            "import java.util.List;\n",
            "import org.hibernate.validator.constraints.UniqueElements;\n",
            "\n",
        )));
        assert!(code.contains("@JsonInclude(JsonInclude.Include.NON_NULL)\npublic class Customer {"));
        assert!(code.contains(concat!(
            "    @NotNull(message = \"email is required\")\n",
            "    @Email(message = \"email must be a valid email address\")\n",
            "    @JsonProperty(\"email\")\n",
            "    private String email;\n",
        )));
        assert!(code.contains(concat!(
            "    @UniqueElements(message = \"tags must not contain duplicates\")\n",
            "    @JsonProperty(\"tags\")\n",
            "    private List<String> tags;\n",
        )));
    }

    #[test]
    fn test_optional_wrapping_follows_required() {
        let options = GenerationOptions {
            use_optional: true,
            ..minimal()
        };
        let code = render(
            &options,
            json!({"Profile": {
                "required": ["handle"],
                "properties": {"handle": {"type": "string"}, "bio": {"type": "string"}}
            }}),
            "Profile",
        );
        assert!(code.contains("    private String handle;\n"));
        assert!(code.contains("    private Optional<String> bio;\n"));
        assert!(code.contains("import java.util.Optional;\n"));
    }

    #[test]
    fn test_java_identifier() {
        assert_eq!(java_identifier("class"), "_class");
        assert_eq!(java_identifier("default"), "_default");
        assert_eq!(java_identifier("2fa"), "_2fa");
        assert_eq!(java_identifier("e.mail"), "e_mail");
        assert_eq!(java_identifier("classes"), "classes");
        assert_eq!(java_identifier(""), "_");
    }

    #[test]
    fn test_reserved_property_names() {
        let options = GenerationOptions {
            use_jackson: true,
            generate_helpers: true,
            ..minimal()
        };
        let code = render(
            &options,
            json!({"Lesson": {"properties": {
                "class": {"type": "string"},
                "1st": {"type": "boolean"}
            }}}),
            "Lesson",
        );
        assert!(code.contains("    @JsonProperty(\"class\")\n    private String _class;\n"));
        assert!(code.contains("    @JsonProperty(\"1st\")\n    private Boolean _1st;\n"));
        assert!(code.contains("    public String get_class() {\n        return _class;\n    }\n"));
        assert!(code.contains("    public void set_1st(Boolean _1st) {\n        this._1st = _1st;\n    }\n"));
    }

    #[test]
    fn test_no_imports_block_when_unused() {
        let code = render(&minimal(), json!({"Empty": {"type": "object"}}), "Empty");
        assert!(code.starts_with("package com.example.model;\n\n/*\n"));
        assert!(code.ends_with("public class Empty {\n}\n"));
    }
}
