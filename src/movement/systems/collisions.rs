//! Movement domain: ground and wall detection systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{ContactProbe, ContactState, GroundedChanged, WallContact};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut grounded_events: MessageWriter<GroundedChanged>,
    mut query: Query<(Entity, &Transform, &Collider, &ContactProbe, &mut ContactState)>,
) {
    for (entity, transform, collider, probe, mut contacts) in &mut query {
        // A probe without layers never reports ground
        if !probe.ground_enabled {
            continue;
        }

        let ground_filter = SpatialQueryFilter::from_mask(probe.ground_mask);

        // Cast a short ray downward from the feet
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };
        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            probe.ground_distance,
            true,
            &ground_filter,
        );

        let grounded = hit.is_some();
        if grounded == contacts.grounded {
            continue;
        }

        contacts.grounded = grounded;
        grounded_events.write(GroundedChanged { entity, grounded });
        if grounded {
            debug!("Landed: entity={:?}", entity);
        } else {
            debug!("Left ground: entity={:?}", entity);
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &ContactProbe, &mut ContactState)>,
) {
    for (transform, collider, probe, mut contacts) in &mut query {
        if !probe.wall_enabled {
            continue;
        }

        let wall_filter = SpatialQueryFilter::from_mask(probe.wall_mask);

        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };
        let origin = transform.translation.truncate();
        let reach = half_width + probe.wall_distance;

        let left = spatial_query
            .cast_ray(origin, Dir2::NEG_X, reach, true, &wall_filter)
            .is_some();
        let right = spatial_query
            .cast_ray(origin, Dir2::X, reach, true, &wall_filter)
            .is_some();

        let wall = WallContact::from_sides(left, right);
        if wall != contacts.wall {
            contacts.wall = wall;
        }
    }
}
