use std::path::{Path, PathBuf};

use actionsmith_core::GeneratedFile;

use crate::{ActionNames, paths};

/// A generated action source file (user-editable after scaffolding).
///
/// The rendered text is a fixed template: identical inputs produce
/// byte-identical output. The pattern is embedded into the Go raw string
/// literal as-is; a pattern containing a backtick produces a file that does
/// not compile.
pub struct ActionFile {
    name: String,
    pattern: String,
    names: ActionNames,
}

impl ActionFile {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        let name = name.into();
        let names = ActionNames::derive(&name);

        Self {
            name,
            pattern: pattern.into(),
            names,
        }
    }

    /// The identifiers this file declares.
    pub fn names(&self) -> &ActionNames {
        &self.names
    }
}

impl GeneratedFile for ActionFile {
    fn path(&self, base: &Path) -> PathBuf {
        paths::action_path(base, &self.name)
    }

    fn render(&self) -> String {
        format!(
            r#"package actions

import (
    "regexp"
)

type {type_name} struct {{
    options *Options
}}

func {constructor}() *{type_name} {{
    return &{type_name}{{
        options: &Options{{
            "Name": "{name}",
            "Re":   regexp.MustCompile(`{pattern}`),
        }},
    }}
}}

func (a {type_name}) GetOptions() *Options {{
    return a.options
}}

func (a {type_name}) Run(e *Event) error {{
    e.Say("{name}")

    return nil
}}
"#,
            type_name = self.names.type_name(),
            constructor = self.names.constructor_name(),
            name = self.name,
            pattern = self.pattern,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_exact_output() {
        let file = ActionFile::new("foo", "^foo$");

        assert_eq!(
            file.render(),
            r#"package actions

import (
    "regexp"
)

type fooAction struct {
    options *Options
}

func newFooAction() *fooAction {
    return &fooAction{
        options: &Options{
            "Name": "foo",
            "Re":   regexp.MustCompile(`^foo$`),
        },
    }
}

func (a fooAction) GetOptions() *Options {
    return a.options
}

func (a fooAction) Run(e *Event) error {
    e.Say("foo")

    return nil
}
"#
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = ActionFile::new("rate", "(?i)^~rate").render();
        let b = ActionFile::new("rate", "(?i)^~rate").render();

        assert_eq!(a, b);
    }

    #[test]
    fn test_pattern_is_embedded_verbatim() {
        let rendered = ActionFile::new("math", r"(?i)^~math \d+").render();

        assert!(rendered.contains(r"regexp.MustCompile(`(?i)^~math \d+`)"));
    }

    #[test]
    fn test_path_follows_name() {
        let file = ActionFile::new("foo", "^foo$");

        assert_eq!(
            file.path(Path::new(".")),
            Path::new("./cmd/actions/foo.go")
        );
    }
}
