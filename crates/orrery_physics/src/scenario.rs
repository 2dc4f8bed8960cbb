use orrery_core::{palette, Body, SimConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The canonical five-planet seed set: heavy bodies on crossing paths so
/// that merges happen within a short run.
pub fn reference_system() -> Vec<Body> {
    vec![
        Body::new(
            "Planet 1",
            5.972e28,
            4000.0,
            [5.972e14, 300.0, 0.0],
            [0.0, 160.0, 0.0],
            palette::RED,
        ),
        Body::new(
            "Planet 2",
            9.0e26,
            5000.0,
            [24e13, 5.972e13, 100.0],
            [0.0, 600.0, -400.0],
            palette::BLUE,
        ),
        Body::new(
            "Planet 3",
            7.348e30,
            2000.0,
            [23e13, 5.972e14, 50.0],
            [1000.0, 0.0, 500.0],
            palette::GREEN,
        ),
        Body::new(
            "Planet 4",
            7.0e30,
            9000.0,
            [5.972e14, 4e14, -50.0],
            [-1000.0, 0.0, 300.0],
            palette::ORANGE,
        ),
        Body::new(
            "Planet 5",
            2.0e31,
            8000.0,
            [5.972e13, 4e14, -50.0],
            [0.0, -2500.0, -400.0],
            palette::PURPLE,
        ),
    ]
}

/// Generate `n` random bodies in a cube around the origin, with velocities
/// drawn uniformly in direction on the sphere. Deterministic per seed.
pub fn random_cloud(n: usize, config: &SimConfig) -> Vec<Body> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        bodies.push(random_body(i, &mut rng));
    }

    bodies
}

fn random_body(index: usize, rng: &mut impl Rng) -> Body {
    let pos = [
        rng.gen_range(-6e14..6e14),
        rng.gen_range(-6e14..6e14),
        rng.gen_range(-6e14..6e14),
    ];

    // Uniform direction on the sphere, speed in the seed set's range
    let theta = rng.gen_range(0.0..std::f64::consts::TAU);
    let phi = (rng.gen_range(-1.0..1.0f64)).acos();
    let speed = rng.gen_range(100.0..2500.0);
    let vel = [
        speed * phi.sin() * theta.cos(),
        speed * phi.sin() * theta.sin(),
        speed * phi.cos(),
    ];

    let mass = rng.gen_range(1e26..2e31);
    let radius = rng.gen_range(1000.0..9000.0);
    let color = [
        rng.gen_range(0.2..1.0f32),
        rng.gen_range(0.2..1.0f32),
        rng.gen_range(0.2..1.0f32),
        1.0,
    ];

    Body::new(format!("Body {}", index + 1), mass, radius, pos, vel, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_system_shape() {
        let bodies = reference_system();
        assert_eq!(bodies.len(), 5);
        assert!(bodies.iter().all(|b| b.mass > 0.0 && b.radius > 0.0));
        assert!(bodies.iter().all(|b| b.is_alive() && b.trail.is_empty()));
    }

    #[test]
    fn test_random_cloud_is_deterministic_per_seed() {
        let config = SimConfig {
            seed: 7,
            ..SimConfig::default()
        };
        let a = random_cloud(20, &config);
        let b = random_cloud(20, &config);

        assert_eq!(a.len(), 20);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.velocity, y.velocity);
            assert_eq!(x.mass, y.mass);
        }
    }

    #[test]
    fn test_random_cloud_respects_invariants() {
        let config = SimConfig::default();
        let bodies = random_cloud(50, &config);
        assert!(bodies.iter().all(|b| b.mass > 0.0 && b.radius > 0.0));
    }
}
