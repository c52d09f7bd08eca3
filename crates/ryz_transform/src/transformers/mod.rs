//! The single-responsibility line translators.
//!
//! Each transformer inspects one line plus the unit's mutable state and
//! appends zero or more output chunks. Transformers are independent and
//! order-sensitive: within one state every transformer is offered every
//! line, so their line shapes must stay disjoint.

pub(crate) mod attribute;
pub(crate) mod comment;
pub(crate) mod header;
pub(crate) mod member;
pub(crate) mod multiline;
pub(crate) mod statement;

use crate::error::TransformError;
use crate::state::TransformerId;
use crate::unit::CompilationUnit;

pub(crate) fn dispatch(
    id: TransformerId,
    unit: &mut CompilationUnit,
    line: &str,
) -> Result<(), TransformError> {
    match id {
        TransformerId::PackageClass => header::package_class(unit, line),
        TransformerId::Import => {
            header::import(unit, line);
            Ok(())
        }
        TransformerId::Annotation => {
            header::annotation(unit, line);
            Ok(())
        }
        TransformerId::Attribute => {
            attribute::attribute(unit, line);
            Ok(())
        }
        TransformerId::Comment => {
            comment::comment(unit, line);
            Ok(())
        }
        TransformerId::ClosingKey => comment::closing_key(unit, line),
        TransformerId::Method => {
            member::method(unit, line);
            Ok(())
        }
        TransformerId::Constructor => {
            member::constructor(unit, line);
            Ok(())
        }
        TransformerId::Return => {
            statement::return_marker(unit, line);
            Ok(())
        }
        TransformerId::Statement => {
            statement::statement(unit, line);
            Ok(())
        }
        TransformerId::SimpleAssignment => {
            statement::simple_assignment(unit, line);
            Ok(())
        }
        TransformerId::SingleValue => {
            statement::single_value(unit, line);
            Ok(())
        }
        TransformerId::InlineBlock => {
            statement::inline_block(unit, line);
            Ok(())
        }
        TransformerId::MultilineString => {
            multiline::multiline_string(unit, line);
            Ok(())
        }
    }
}
