// error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BagError {
    #[error("could not find an existing type bag for type {type_name}")]
    UnknownType { type_name: &'static str },

    #[error("type bag of {expected} cannot hold a value of type {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("index {index} out of range for type bag of {type_name} with {len} entities")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        type_name: &'static str,
    },
}

#[cfg(test)]
mod test {
    use super::BagError;

    #[test]
    fn messages_name_the_offending_type() {
        let err = BagError::UnknownType { type_name: "demo::Baz" };
        assert_eq!(
            err.to_string(),
            "could not find an existing type bag for type demo::Baz"
        );

        let err = BagError::IndexOutOfBounds {
            index: 4,
            len: 4,
            type_name: "demo::Bar",
        };
        assert_eq!(
            err.to_string(),
            "index 4 out of range for type bag of demo::Bar with 4 entities"
        );
    }
}
