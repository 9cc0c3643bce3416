use crate::aspects::types::{AspectKind, Chord};
use crate::chart::{ChartData, WheelSettings};

/// Chords to draw for `data`.
///
/// Returns nothing at all when aspects are hidden. Aspects naming a body that
/// is not in the chart are skipped; the rest of the chart still renders.
pub fn visible_chords(data: &ChartData, show_aspects: bool, settings: &WheelSettings) -> Vec<Chord> {
    if !show_aspects {
        return Vec::new();
    }

    let ratio = settings.aspect_ratio;
    let mut chords = Vec::with_capacity(data.aspects.len());

    for aspect in &data.aspects {
        let (Some(p1), Some(p2)) = (data.body(&aspect.planet1), data.body(&aspect.planet2)) else {
            log::debug!(
                "Skipping {} aspect {} / {}: body not in chart",
                aspect.aspect,
                aspect.planet1,
                aspect.planet2
            );
            continue;
        };

        let kind = AspectKind::from_name(&aspect.aspect);
        chords.push(Chord {
            from: settings.point_at(p1.longitude, ratio),
            to: settings.point_at(p2.longitude, ratio),
            color_class: kind.tone(),
            dashed: kind.is_dashed(),
            planet1: p1.name.clone(),
            planet2: p2.name.clone(),
            kind,
            orb: aspect.orb,
        });
    }

    chords
}
