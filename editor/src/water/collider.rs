//! Trigger collider along the top edge of the water.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use water_shared::water::{BoundarySegment, BoundarySink, InteractableWater};

use super::PlaceEdgeColliderEvent;

/// Builds a rapier segment collider from a boundary segment in the water's
/// local XY plane.
pub fn segment_collider(segment: &BoundarySegment) -> Collider {
    let [start, end] = segment.points();
    Collider::segment(start.extend(0.0), end.extend(0.0))
}

/// Collects the boundary segment as a collider ready to insert.
#[derive(Default)]
pub struct SensorSegmentSink {
    collider: Option<Collider>,
}

impl SensorSegmentSink {
    pub fn take(&mut self) -> Option<Collider> {
        self.collider.take()
    }
}

impl BoundarySink for SensorSegmentSink {
    fn apply_boundary(&mut self, segment: BoundarySegment) {
        self.collider = Some(segment_collider(&segment));
    }
}

pub fn place_edge_collider_system(
    mut commands: Commands,
    mut events: EventReader<PlaceEdgeColliderEvent>,
    waters: Query<&InteractableWater>,
) {
    for event in events.read() {
        let Ok(water) = waters.get(event.entity) else {
            warn!(
                "Ignoring edge collider request for {}: not a water surface",
                event.entity
            );
            continue;
        };

        let mut sink = SensorSegmentSink::default();
        if let Err(err) = water.reset_edge_collider(&mut sink) {
            error!("Could not place edge collider on {}: {err}", event.entity);
            continue;
        }

        if let Some(collider) = sink.take() {
            commands
                .entity(event.entity)
                .insert((collider, Sensor, ActiveEvents::COLLISION_EVENTS));
        }
    }
}

/// Logs bodies entering and leaving a water trigger.
pub fn log_water_triggers(
    mut collision_events: EventReader<CollisionEvent>,
    waters: Query<(), With<InteractableWater>>,
) {
    for event in collision_events.read() {
        let (a, b, entered) = match event {
            CollisionEvent::Started(a, b, _) => (*a, *b, true),
            CollisionEvent::Stopped(a, b, _) => (*a, *b, false),
        };
        let (water, other) = if waters.contains(a) {
            (a, b)
        } else if waters.contains(b) {
            (b, a)
        } else {
            continue;
        };

        debug!(
            "{other} {} water {water}",
            if entered { "entered" } else { "left" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use water_shared::water::RecordedBoundary;

    #[test]
    fn collider_is_segment_between_top_corners() {
        let water = InteractableWater::default();
        let segment = water.reset_edge_collider(RecordedBoundary::default()).unwrap();
        let collider = segment_collider(&segment);

        let view = collider.as_segment().unwrap();
        assert_eq!(view.a(), Vec3::new(-5.0, 2.0, 0.0));
        assert_eq!(view.b(), Vec3::new(5.0, 2.0, 0.0));
    }

    #[test]
    fn sink_yields_collider_once() {
        let water = InteractableWater::default();
        let mut sink = SensorSegmentSink::default();

        water.reset_edge_collider(&mut sink).unwrap();

        assert!(sink.take().is_some());
        assert!(sink.take().is_none());
    }
}
