use edge_sketch::image::io::GrayImageU8;
use edge_sketch::image::{ImageF32, Mask};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> GrayImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    GrayImageU8::new(width, height, img)
}

/// Edge mask, saliency and direction fields fed straight to the selector.
pub struct SelectorFixture {
    pub edges: Mask,
    pub saliency: ImageF32,
    pub direction: ImageF32,
}

/// `n × n` grid whose only edge pixels form the main diagonal, all with
/// saliency 1 and direction 0.
pub fn diagonal_fixture(n: usize) -> SelectorFixture {
    SelectorFixture {
        edges: Mask::from_fn(n, n, |x, y| x == y),
        saliency: ImageF32::from_fn(n, n, |x, y| if x == y { 1.0 } else { 0.0 }),
        direction: ImageF32::new(n, n),
    }
}

/// Dense, irregular fixture with deterministic pseudo-random values.
pub fn noisy_fixture(width: usize, height: usize, seed: u64) -> SelectorFixture {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Mask::new(width, height);
    let mut saliency = ImageF32::new(width, height);
    let mut direction = ImageF32::new(width, height);
    for i in 0..width * height {
        edges.data[i] = rng.random::<f32>() < 0.55;
        saliency.data[i] = rng.random::<f32>();
        direction.data[i] = rng.random_range(-1.0f32..1.0) * std::f32::consts::PI;
    }
    SelectorFixture {
        edges,
        saliency,
        direction,
    }
}
