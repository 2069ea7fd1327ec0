//! Attribute parsing for the Record derive macro.
//!
//! Handles struct-level `#[record(rename_all = "...")]` and field-level
//! `#[record(skip)]` / `#[record(key = "value", ...)]` attributes.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase,
};
use syn::{Attribute, LitStr, Result};

/// Case conversion applied to declared field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RenameRule {
    Lower,
    Upper,
    Snake,
    Camel,
    Pascal,
    ScreamingSnake,
    Kebab,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "snake_case" => Self::Snake,
            "camelCase" => Self::Camel,
            "PascalCase" => Self::Pascal,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            other => {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("unknown rename_all rule '{other}'"),
                ));
            }
        })
    }

    pub(super) fn apply(self, name: &str) -> String {
        match self {
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
            Self::Snake => name.to_snake_case(),
            Self::Camel => name.to_lower_camel_case(),
            Self::Pascal => name.to_upper_camel_case(),
            Self::ScreamingSnake => name.to_shouty_snake_case(),
            Self::Kebab => name.to_kebab_case(),
        }
    }

    /// Extract the rule from struct-level `#[record(rename_all = "...")]`.
    pub(super) fn from_attrs(attrs: &[Attribute]) -> Result<Option<Self>> {
        let mut rule = None;
        for attr in attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    rule = Some(Self::parse(&lit)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported struct attribute, expected `rename_all`"))
                }
            })?;
        }
        Ok(rule)
    }
}

/// Parsed field-level `#[record(...)]` attributes.
#[derive(Debug, Default)]
pub(super) struct FieldAttr {
    pub skip: bool,
    /// `(key, value)` tags in declaration order.
    pub tags: Vec<(String, String)>,
}

impl FieldAttr {
    pub(super) fn from_field(field: &syn::Field) -> Result<Self> {
        let mut out = FieldAttr::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    out.skip = true;
                    return Ok(());
                }
                let Some(key) = meta.path.get_ident() else {
                    return Err(meta.error("expected a tag name"));
                };
                let key = key.to_string();
                let value: LitStr = meta.value()?.parse()?;
                if out.tags.iter().any(|(k, _)| *k == key) {
                    return Err(meta.error(format!("duplicate tag `{key}`")));
                }
                out.tags.push((key, value.value()));
                Ok(())
            })?;
        }
        Ok(out)
    }
}
