//! Parameter-list parsing.
//!
//! Block literals and inline block arguments need the arity and the element
//! types of their parameter list to name the generated functional-interface
//! type. The list arrives as already-transformed Java text of the shape
//! `    /*attribute*/  int i ,    /*attribute*/  String ...  rest `, so this
//! parser works on whitespace tokens, not on the original source.

/// Name and type of a single transformed parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    name: String,
    ty: String,
}

/// Primitive spellings widened to wrappers inside generic argument lists.
fn widened(ty: &str) -> &str {
    match ty {
        "int" => "Integer",
        "boolean" => "Boolean",
        other => other,
    }
}

impl ParameterInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type as it appears in a generic argument list.
    pub fn generic_type(&self) -> String {
        widened(&self.ty).to_string()
    }

    /// Parses a comma-joined transformed parameter list. Varargs written as
    /// `Type ... name` fold back to the `Type[]` element type.
    pub fn parse(parameters: &str) -> Vec<ParameterInfo> {
        if parameters.trim().is_empty() {
            return Vec::new();
        }
        let mut infos = Vec::new();
        for piece in parameters.split(',') {
            let tokens: Vec<&str> = piece.split_whitespace().collect();
            match tokens.as_slice() {
                [_, ty, "...", name] => infos.push(ParameterInfo {
                    name: (*name).to_string(),
                    ty: format!("{}[]", ty),
                }),
                [_, ty, name] => infos.push(ParameterInfo {
                    name: (*name).to_string(),
                    ty: (*ty).to_string(),
                }),
                _ => continue,
            }
        }
        infos
    }

    /// Generic-argument suffix for the functional-interface type name:
    /// empty for a zero-arg list, otherwise `,T1,T2,…` with a leading comma
    /// so callers can splice it after the return type.
    pub fn type_list(infos: &[ParameterInfo]) -> String {
        if infos.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        for info in infos {
            out.push(',');
            out.push_str(widened(&info.ty));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_parses_to_nothing() {
        assert!(ParameterInfo::parse("").is_empty());
        assert!(ParameterInfo::parse("   ").is_empty());
        assert_eq!(ParameterInfo::type_list(&[]), "");
    }

    #[test]
    fn transformed_parameters_parse_back_to_pairs() {
        let infos = ParameterInfo::parse("    /*attribute*/  int i ,    /*attribute*/  String s ");
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].name(), "i");
        assert_eq!(infos[1].name(), "s");
        assert_eq!(ParameterInfo::type_list(&infos), ",Integer,String");
    }

    #[test]
    fn varargs_fold_to_array_types() {
        let infos = ParameterInfo::parse("    /*attribute*/  String ...  words ");
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].name(), "words");
        assert_eq!(ParameterInfo::type_list(&infos), ",String[]");
    }
}
