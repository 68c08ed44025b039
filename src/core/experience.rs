use crate::models::ExperienceLevel;

/// Experience compatibility (0-1) of a mentor for a mentee
///
/// Mentors one or two levels above the mentee are ideal. Peers and a
/// three-level gap are still useful, a mentor one level junior is
/// acceptable, anything else gets the lowest non-zero weight.
#[inline]
pub fn experience_compatibility(mentee: ExperienceLevel, mentor: ExperienceLevel) -> f64 {
    let difference = mentor.ordinal() - mentee.ordinal();

    match difference {
        1..=2 => 1.0,
        0 | 3 => 0.7,
        -1 => 0.5,
        _ => 0.3,
    }
}
