//! Identifier derivation for generated actions.

use actionsmith_core::capitalize;

/// The identifiers derived from an operator-supplied action name.
///
/// For a name `foo` the action type is `fooAction` and its constructor is
/// `newFooAction`: the type keeps the name's own case, the constructor
/// prefixes `new` and uppercases the first letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNames {
    type_name: String,
    constructor_name: String,
}

impl ActionNames {
    /// Derive the action type and constructor names from a raw name.
    ///
    /// Callers must reject empty names; derivation itself is total.
    pub fn derive(name: &str) -> Self {
        let type_name = format!("{name}Action");
        let constructor_name = format!("new{}", capitalize(&type_name));

        Self {
            type_name,
            constructor_name,
        }
    }

    /// The Go struct name, e.g. `fooAction`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The Go constructor function name, e.g. `newFooAction`.
    pub fn constructor_name(&self) -> &str {
        &self.constructor_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_type_name() {
        assert_eq!(ActionNames::derive("foo").type_name(), "fooAction");
        assert_eq!(ActionNames::derive("ping").type_name(), "pingAction");
        assert_eq!(ActionNames::derive("Weather").type_name(), "WeatherAction");
    }

    #[test]
    fn test_derive_constructor_name() {
        assert_eq!(
            ActionNames::derive("foo").constructor_name(),
            "newFooAction"
        );
        assert_eq!(
            ActionNames::derive("ping").constructor_name(),
            "newPingAction"
        );
        assert_eq!(
            ActionNames::derive("Weather").constructor_name(),
            "newWeatherAction"
        );
    }

    #[test]
    fn test_constructor_is_prefixed_capitalized_type() {
        for name in ["foo", "helloStirnbot", "Rate", "x"] {
            let names = ActionNames::derive(name);
            let expected = format!("new{}", capitalize(names.type_name()));
            assert_eq!(names.constructor_name(), expected);
        }
    }
}
