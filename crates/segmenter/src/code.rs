use crate::error::Result;
use crate::provider::StructureProvider;
use crate::types::{LineRange, SegmentEvent};

/// Segment source code into an event stream.
///
/// Each top-level type contributes a `TypeStart` at its declaration line
/// followed by one `Unit` per member declaration, spanning from the member's
/// attached doc comment (or its declaration) through its syntactic end.
/// Fields, statements and trailing content after the last member never form
/// units of their own.
pub fn segment_source<P>(provider: &mut P, content: &str) -> Result<Vec<SegmentEvent>>
where
    P: StructureProvider + ?Sized,
{
    let types = provider.top_level_types(content)?;

    let mut events = Vec::new();
    for ty in &types {
        events.push(SegmentEvent::TypeStart(ty.start_line));
        for member in &ty.members {
            events.push(SegmentEvent::Unit(LineRange::new(
                member.unit_start(),
                member.end_line,
            )));
        }
    }
    Ok(events)
}
