/// Constants of the force simulation and the graph view.
///
/// The defaults are tuned for one step per frame at 60 fps.
#[derive(Debug, Clone)]
pub struct ForceConfig {
    /// RNG seed for spawn angles.
    pub seed: u64,
    /// Strength of the inverse-square repulsion between every pair of nodes.
    pub repulsion: f32,
    /// Rest length of the spring pulling a child toward its parent.
    pub spring_length: f32,
    /// Stiffness of that spring.
    pub spring_strength: f32,
    /// Pull of every node toward the origin, per unit of distance.
    pub centering: f32,
    /// Velocity multiplier applied every step.
    pub damping: f32,
    /// Upper bound on the speed of a node after damping.
    pub max_speed: f32,
    /// Distance from its anchor at which a new node appears.
    pub spawn_distance: f32,
    /// Pointer distance within which a node is picked.
    pub pick_radius: f32,
    /// Nodes above this level only show their label when hovered.
    pub label_levels: u32,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            repulsion: 3000.0,
            spring_length: 120.0,
            spring_strength: 0.05,
            centering: 0.005,
            damping: 0.75,
            max_speed: 50.0,
            spawn_distance: 100.0,
            pick_radius: 20.0,
            label_levels: 2,
        }
    }
}

impl ForceConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the repulsion strength.
    pub fn with_repulsion(mut self, repulsion: f32) -> Self {
        self.repulsion = repulsion;
        self
    }

    /// Set the spring rest length and stiffness.
    pub fn with_spring(mut self, length: f32, strength: f32) -> Self {
        self.spring_length = length;
        self.spring_strength = strength;
        self
    }

    /// Set the centering pull.
    pub fn with_centering(mut self, centering: f32) -> Self {
        self.centering = centering;
        self
    }

    /// Set the damping factor (clamped to `[0, 1]`).
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping.clamp(0.0, 1.0);
        self
    }

    /// Set the speed limit (at least 0).
    pub fn with_max_speed(mut self, speed: f32) -> Self {
        self.max_speed = speed.max(0.0);
        self
    }

    /// Set the spawn distance (at least 1, so a child never spawns on its parent).
    pub fn with_spawn_distance(mut self, distance: f32) -> Self {
        self.spawn_distance = distance.max(1.0);
        self
    }

    /// Set the pick radius.
    pub fn with_pick_radius(mut self, radius: f32) -> Self {
        self.pick_radius = radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ForceConfig::default();
        assert_eq!(config.seed, 42);
        assert!((config.repulsion - 3000.0).abs() < f32::EPSILON);
        assert!((config.spring_length - 120.0).abs() < f32::EPSILON);
        assert!((config.damping - 0.75).abs() < f32::EPSILON);
        assert_eq!(config.label_levels, 2);
    }

    #[test]
    fn builder_chain() {
        let config = ForceConfig::default()
            .with_seed(7)
            .with_spring(80.0, 0.1)
            .with_centering(0.0)
            .with_pick_radius(30.0);
        assert_eq!(config.seed, 7);
        assert!((config.spring_length - 80.0).abs() < f32::EPSILON);
        assert!((config.spring_strength - 0.1).abs() < f32::EPSILON);
        assert!(config.centering.abs() < f32::EPSILON);
        assert!((config.pick_radius - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn builders_clamp() {
        let config = ForceConfig::default()
            .with_damping(1.5)
            .with_max_speed(-1.0)
            .with_spawn_distance(0.0);
        assert!((config.damping - 1.0).abs() < f32::EPSILON);
        assert!(config.max_speed.abs() < f32::EPSILON);
        assert!((config.spawn_distance - 1.0).abs() < f32::EPSILON);
    }
}
