use crate::config::Config;
use image::{DynamicImage, GrayImage, Luma};
use std::collections::HashSet;

type Contour = Vec<(i32, i32)>;

/// Turns a validated frame into the near-binary image handed to OCR: crisp
/// digit strokes with the dial boundary emphasized, everything else black.
pub fn isolate_digits(config: &Config, frame: &DynamicImage) -> GrayImage {
    let gray = frame.to_luma8();
    let blurred = gaussian_blur(&gray, config.blur_kernel);
    let edges = canny(&blurred, config.canny_low, config.canny_high);
    let contours = find_external_contours(&edges);

    // The boundary emphasis is drawn on the unblurred grayscale, and only
    // for the last contour the scan discovered.
    let mut readout = gray;
    if let Some(contour) = contours.last() {
        draw_contour(&mut readout, contour, config.contour_stroke);
    }

    binarize(&mut readout, config.binarize_floor);
    readout
}

/// Forces every pixel below the floor to pure black. Pixels at or above the
/// floor are left unchanged, so applying this twice changes nothing.
pub fn binarize(img: &mut GrayImage, floor: u8) {
    for pixel in img.pixels_mut() {
        if pixel.0[0] < floor {
            pixel.0[0] = 0;
        }
    }
}

fn gaussian_kernel(ksize: u32) -> Vec<f32> {
    // Sigma derived from the kernel size the way OpenCV does when none is given.
    let sigma = 0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let half = (ksize / 2) as i32;

    let mut kernel = Vec::with_capacity(ksize as usize);
    let mut sum = 0.0;
    for i in -half..=half {
        let weight = (-((i * i) as f32) / (2.0 * sigma * sigma)).exp();
        kernel.push(weight);
        sum += weight;
    }
    for weight in kernel.iter_mut() {
        *weight /= sum;
    }
    kernel
}

fn gaussian_blur(img: &GrayImage, ksize: u32) -> GrayImage {
    let kernel = gaussian_kernel(ksize);
    let half = (ksize / 2) as i32;
    let (w, h) = img.dimensions();
    let (wi, hi) = (w as i32, h as i32);

    // Separable convolution, replicating pixels at the borders.
    let mut horizontal = vec![0f32; (w * h) as usize];
    for y in 0..hi {
        for x in 0..wi {
            let mut acc = 0.0;
            for (i, weight) in kernel.iter().enumerate() {
                let sx = (x + i as i32 - half).clamp(0, wi - 1);
                acc += weight * img.get_pixel(sx as u32, y as u32).0[0] as f32;
            }
            horizontal[(y * wi + x) as usize] = acc;
        }
    }

    let mut out = GrayImage::new(w, h);
    for y in 0..hi {
        for x in 0..wi {
            let mut acc = 0.0;
            for (i, weight) in kernel.iter().enumerate() {
                let sy = (y + i as i32 - half).clamp(0, hi - 1);
                acc += weight * horizontal[(sy * wi + x) as usize];
            }
            out.put_pixel(x as u32, y as u32, Luma([acc.round().clamp(0.0, 255.0) as u8]));
        }
    }
    out
}

fn canny(img: &GrayImage, low: f32, high: f32) -> GrayImage {
    let (w, h) = img.dimensions();
    let (wi, hi) = (w as i32, h as i32);
    let sample = |x: i32, y: i32| -> f32 {
        img.get_pixel(x.clamp(0, wi - 1) as u32, y.clamp(0, hi - 1) as u32).0[0] as f32
    };

    // Sobel gradients, L1 magnitude, direction quantized to four sectors.
    let mut magnitude = vec![0f32; (w * h) as usize];
    let mut direction = vec![0u8; (w * h) as usize];
    for y in 0..hi {
        for x in 0..wi {
            let gx = -sample(x - 1, y - 1) + sample(x + 1, y - 1) - 2.0 * sample(x - 1, y)
                + 2.0 * sample(x + 1, y)
                - sample(x - 1, y + 1)
                + sample(x + 1, y + 1);
            let gy = -sample(x - 1, y - 1) - 2.0 * sample(x, y - 1) - sample(x + 1, y - 1)
                + sample(x - 1, y + 1)
                + 2.0 * sample(x, y + 1)
                + sample(x + 1, y + 1);

            let idx = (y * wi + x) as usize;
            magnitude[idx] = gx.abs() + gy.abs();

            let mut angle = gy.atan2(gx).to_degrees();
            if angle < 0.0 {
                angle += 180.0;
            }
            direction[idx] = if !(22.5..157.5).contains(&angle) {
                0
            } else if angle < 67.5 {
                1
            } else if angle < 112.5 {
                2
            } else {
                3
            };
        }
    }

    // Non-maximum suppression along the gradient direction.
    let mut thin = vec![0f32; magnitude.len()];
    for y in 0..hi {
        for x in 0..wi {
            let idx = (y * wi + x) as usize;
            let (dx, dy) = match direction[idx] {
                0 => (1, 0),
                1 => (1, 1),
                2 => (0, 1),
                _ => (1, -1),
            };
            let neighbor = |nx: i32, ny: i32| -> f32 {
                if nx < 0 || nx >= wi || ny < 0 || ny >= hi {
                    0.0
                } else {
                    magnitude[(ny * wi + nx) as usize]
                }
            };
            let m = magnitude[idx];
            if m >= neighbor(x + dx, y + dy) && m >= neighbor(x - dx, y - dy) {
                thin[idx] = m;
            }
        }
    }

    // Hysteresis: seed from strong edges, grow through weak ones.
    let mut out = GrayImage::new(w, h);
    let mut stack = Vec::new();
    for y in 0..hi {
        for x in 0..wi {
            if thin[(y * wi + x) as usize] >= high && out.get_pixel(x as u32, y as u32).0[0] == 0 {
                out.put_pixel(x as u32, y as u32, Luma([255]));
                stack.push((x, y));
            }
        }
    }
    while let Some((x, y)) = stack.pop() {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || nx >= wi || ny < 0 || ny >= hi {
                    continue;
                }
                if out.get_pixel(nx as u32, ny as u32).0[0] == 0
                    && thin[(ny * wi + nx) as usize] >= low
                {
                    out.put_pixel(nx as u32, ny as u32, Luma([255]));
                    stack.push((nx, ny));
                }
            }
        }
    }
    out
}

/// Outer boundaries only, in row-major discovery order. Each connected edge
/// component contributes one contour traced around its outside.
fn find_external_contours(edges: &GrayImage) -> Vec<Contour> {
    let (w, h) = edges.dimensions();
    let (wi, hi) = (w as i32, h as i32);
    let is_edge = |x: i32, y: i32| -> bool {
        x >= 0 && x < wi && y >= 0 && y < hi && edges.get_pixel(x as u32, y as u32).0[0] > 0
    };

    let mut visited = vec![false; (w * h) as usize];
    let mut contours = Vec::new();
    for y in 0..hi {
        for x in 0..wi {
            if is_edge(x, y) && !visited[(y * wi + x) as usize] {
                contours.push(trace_boundary(&is_edge, (x, y)));
                mark_component(&is_edge, &mut visited, (x, y), wi);
            }
        }
    }
    contours
}

// Clockwise Moore neighborhood in image coordinates (y grows downward).
const MOORE: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Moore-neighbor boundary trace. The start pixel is the component's first
/// pixel in row-major order, so its west neighbor is known to be empty.
fn trace_boundary<F: Fn(i32, i32) -> bool>(is_edge: &F, start: (i32, i32)) -> Contour {
    let dir_index = |offset: (i32, i32)| -> usize {
        MOORE.iter().position(|&o| o == offset).unwrap_or(4)
    };

    let mut contour = vec![start];
    let mut current = start;
    let mut backtrack = 4usize; // west
    let mut seen: HashSet<((i32, i32), usize)> = HashSet::new();
    seen.insert((current, backtrack));

    loop {
        let mut next = None;
        for i in 1..=8 {
            let d = (backtrack + i) % 8;
            let candidate = (current.0 + MOORE[d].0, current.1 + MOORE[d].1);
            if is_edge(candidate.0, candidate.1) {
                let d_prev = (backtrack + i - 1) % 8;
                let previous = (current.0 + MOORE[d_prev].0, current.1 + MOORE[d_prev].1);
                let offset = (previous.0 - candidate.0, previous.1 - candidate.1);
                next = Some((candidate, dir_index(offset)));
                break;
            }
        }

        let Some((candidate, new_backtrack)) = next else {
            break; // isolated pixel
        };
        if !seen.insert((candidate, new_backtrack)) {
            break; // boundary closed
        }
        current = candidate;
        backtrack = new_backtrack;
        contour.push(current);
    }
    contour
}

fn mark_component<F: Fn(i32, i32) -> bool>(
    is_edge: &F,
    visited: &mut [bool],
    start: (i32, i32),
    width: i32,
) {
    let mut stack = vec![start];
    visited[(start.1 * width + start.0) as usize] = true;
    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in MOORE {
            let (nx, ny) = (x + dx, y + dy);
            if is_edge(nx, ny) && !visited[(ny * width + nx) as usize] {
                visited[(ny * width + nx) as usize] = true;
                stack.push((nx, ny));
            }
        }
    }
}

fn draw_contour(img: &mut GrayImage, contour: &[(i32, i32)], stroke: u32) {
    let (w, h) = img.dimensions();
    let radius = (stroke / 2) as i32;
    for &(x, y) in contour {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let (px, py) = (x + dx, y + dy);
                if px >= 0 && px < w as i32 && py >= 0 && py < h as i32 {
                    img.put_pixel(px as u32, py as u32, Luma([255]));
                }
            }
        }
    }
}
