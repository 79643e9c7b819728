use robust_segments::Point;

// Directly evaluate the orientation determinant.
fn simple_left_turn(a1: Point, a2: Point, b: Point) -> i32 {
    let det = (a2.x - a1.x) * (b.y - a1.y) - (a2.y - a1.y) * (b.x - a1.x);
    sign_of(det)
}

// Directly compare the squared lengths.
fn simple_compare_distance(a1: Point, a2: Point, b1: Point, b2: Point) -> i32 {
    let a = (a2.x - a1.x).powi(2) + (a2.y - a1.y).powi(2);
    let b = (b2.x - b1.x).powi(2) + (b2.y - b1.y).powi(2);
    sign_of(a - b)
}

fn sign_of(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

fn sign_map<F>(predicate: F, start: Point, width: usize, height: usize) -> Vec<i32>
where
    F: Fn(Point) -> i32,
{
    use float_extras::f64::nextafter;
    let mut yd = start.y;
    let mut data = Vec::with_capacity(width * height);

    for _ in 0..height {
        let mut xd = start.x;
        for _ in 0..width {
            data.push(predicate(Point::new(xd, yd)));
            xd = nextafter(xd, std::f64::INFINITY);
        }
        yd = nextafter(yd, std::f64::INFINITY);
    }

    data
}

use std::path::Path;
fn write_png(data: &[i32], path: &Path, width: usize, height: usize) {
    assert_eq!(data.len(), width * height);

    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(path).unwrap();
    let w = &mut BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().unwrap();
    let data = data
        .iter()
        .map(|sign| match sign {
            -1 => 0u8,
            0 => 127,
            _ => 255,
        })
        .collect::<Vec<_>>();
    writer.write_image_data(&data).unwrap();
}

fn usage(name: &str) -> ! {
    eprintln!(
        "Usage: {} {{naive | robust}} {{left_turn | compare_distance}} <output.png>",
        name
    );
    std::process::exit(1);
}

fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 4 {
        usage(&args[0])
    }

    // The grid starts on the line through p1 and p2, and on the circle of
    // radius |p1 p3| around p1.
    let p1 = Point::new(12., 12.);
    let p2 = Point::new(24., 24.);
    let p3 = Point::new(23.5, 23.5);
    let origin = Point::new(0.5, 0.5);
    let predicate: Box<dyn Fn(Point) -> i32> = match (args[1].as_str(), args[2].as_str()) {
        ("naive", "left_turn") => Box::new(move |p| simple_left_turn(p1, p2, p)),
        ("naive", "compare_distance") => Box::new(move |p| simple_compare_distance(p1, p, p1, p3)),
        ("robust", "left_turn") => Box::new(move |p| robust_segments::left_turn(p1, p2, p)),
        ("robust", "compare_distance") => {
            Box::new(move |p| robust_segments::compare_distance(p1, p, p1, p3))
        }
        _ => usage(&args[0]),
    };

    let data = sign_map(predicate, origin, 256, 256);
    write_png(&data, Path::new(&args[3]), 256, 256);
}
