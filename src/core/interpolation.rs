//! # Interpolation Engine / 插值引擎
//!
//! Parses templates containing named placeholders and substitutes values into
//! them.
//!
//! 解析包含命名占位符的模板并将值代入其中。
//!
//! ## Syntax / 语法
//!
//! - `%{name}` is a placeholder; names are case-sensitive and cannot nest.
//! - `%%` renders a single `%`, so `%%{name}` renders the literal text `%{name}`.
//! - A `%` followed by anything else is kept as is.
//!
//! - `%{name}` 是占位符；名称区分大小写且不能嵌套。
//! - `%%` 渲染为单个 `%`，因此 `%%{name}` 渲染为字面文本 `%{name}`。
//! - `%` 后跟其他任何字符时保持原样。

use crate::core::error::ResolveError;
use crate::core::models::SubstitutionSet;

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template.
/// 已解析的模板。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source`, failing with `MalformedTemplate` on an unterminated,
    /// empty or nested placeholder.
    ///
    /// 解析 `source`；遇到未闭合、空或嵌套的占位符时返回 `MalformedTemplate`。
    pub fn parse(source: &str) -> Result<Self, ResolveError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(pos) = rest.find('%') {
            literal.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            let consumed = if after.starts_with('%') {
                literal.push('%');
                pos + 2
            } else if let Some(body) = after.strip_prefix('{') {
                let Some(end) = body.find('}') else {
                    return Err(malformed(offset + pos, "unterminated placeholder"));
                };
                let name = &body[..end];
                if name.is_empty() {
                    return Err(malformed(offset + pos, "empty placeholder name"));
                }
                if name.contains(['{', '%']) {
                    return Err(malformed(offset + pos, "placeholders cannot be nested"));
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name.to_string()));
                pos + 2 + end + 1
            } else {
                literal.push('%');
                pos + 1
            };

            rest = &rest[consumed..];
            offset += consumed;
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Renders the template. Fails with `MissingPlaceholder` naming the first
    /// unbound placeholder; no partial text is ever returned.
    ///
    /// 渲染模板。遇到第一个未绑定的占位符时返回 `MissingPlaceholder`；绝不返回部分文本。
    pub fn render(&self, substitutions: &SubstitutionSet) -> Result<String, ResolveError> {
        if let Some(missing) = self
            .placeholders()
            .into_iter()
            .find(|name| !substitutions.contains(name))
        {
            return Err(ResolveError::MissingPlaceholder {
                name: missing.to_string(),
                key: None,
            });
        }

        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) => {
                    rendered.push_str(substitutions.get(name).unwrap_or_default())
                }
            }
        }
        Ok(rendered)
    }
}

fn malformed(offset: usize, reason: &str) -> ResolveError {
    ResolveError::MalformedTemplate {
        offset,
        reason: reason.to_string(),
        key: None,
    }
}

/// Parses and renders `template` in one step.
pub fn interpolate(template: &str, substitutions: &SubstitutionSet) -> Result<String, ResolveError> {
    Template::parse(template)?.render(substitutions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_point_at_the_opening_marker() {
        let err = Template::parse("abc %% def %{oops").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedTemplate { offset: 11, .. }));
    }

    #[test]
    fn multibyte_text_around_placeholders_is_preserved() {
        let subs = SubstitutionSet::new().with("name", "产品");
        assert_eq!(interpolate("已创建 %{name}！", &subs).unwrap(), "已创建 产品！");
    }
}
