//! Movement domain: the physics seam between the controller and the world.
//!
//! The controller tick only sees [`PhysicsQueries`] and [`CharacterBody`], so
//! it runs the same against avian and against the flat test world.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// First contact of a swept sphere or ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Distance travelled along the sweep direction before contact.
    pub distance: f32,
    pub normal: Vec3,
}

/// Read-only world queries the controller and camera need.
pub trait PhysicsQueries {
    /// True if a sphere at `center` overlaps any solid geometry.
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> bool;

    /// Sweep a sphere from `origin` along `direction` for at most
    /// `max_distance`. A radius of zero is a ray cast.
    fn sweep_sphere(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Dir3,
        max_distance: f32,
    ) -> Option<SweepHit>;
}

/// The moved body. Resolves collisions itself and reports the motion applied.
pub trait CharacterBody {
    fn position(&self) -> Vec3;

    fn move_body(&mut self, displacement: Vec3) -> Vec3;
}

/// [`PhysicsQueries`] over avian's spatial query pipeline.
pub struct AvianQueries<'a, 'w, 's> {
    spatial: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianQueries<'a, 'w, 's> {
    /// Queries against solid layers, ignoring the `exclude` entities.
    pub fn solid(
        spatial: &'a SpatialQuery<'w, 's>,
        exclude: impl IntoIterator<Item = Entity>,
    ) -> Self {
        let filter =
            SpatialQueryFilter::from_mask(GameLayer::solid()).with_excluded_entities(exclude);
        Self { spatial, filter }
    }
}

impl PhysicsQueries for AvianQueries<'_, '_, '_> {
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> bool {
        let shape = Collider::sphere(radius.max(0.001));
        !self
            .spatial
            .shape_intersections(&shape, center, Quat::IDENTITY, &self.filter)
            .is_empty()
    }

    fn sweep_sphere(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Dir3,
        max_distance: f32,
    ) -> Option<SweepHit> {
        if radius <= 0.0 {
            return self
                .spatial
                .cast_ray(origin, direction, max_distance, true, &self.filter)
                .map(|hit| SweepHit {
                    distance: hit.distance,
                    normal: hit.normal,
                });
        }

        let shape = Collider::sphere(radius);
        let config = ShapeCastConfig::from_max_distance(max_distance);
        self.spatial
            .cast_shape(
                &shape,
                origin,
                Quat::IDENTITY,
                direction,
                &config,
                &self.filter,
            )
            .map(|hit| SweepHit {
                distance: hit.distance,
                normal: hit.normal1,
            })
    }
}

/// [`CharacterBody`] for a dynamic, rotation-locked avian body with gravity
/// disabled. The displacement is handed to the solver as this frame's velocity,
/// which resolves contacts during the physics step.
pub struct VelocityBody<'a> {
    position: Vec3,
    velocity: &'a mut LinearVelocity,
    dt: f32,
}

impl<'a> VelocityBody<'a> {
    pub fn new(position: Vec3, velocity: &'a mut LinearVelocity, dt: f32) -> Self {
        Self {
            position,
            velocity,
            dt,
        }
    }
}

impl CharacterBody for VelocityBody<'_> {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn move_body(&mut self, displacement: Vec3) -> Vec3 {
        self.velocity.0 = if self.dt > 0.0 {
            displacement / self.dt
        } else {
            Vec3::ZERO
        };
        displacement
    }
}
