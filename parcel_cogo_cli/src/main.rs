use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::warn;
use parcel_cogo::{
    geometry::{basic, Position, QuadVertex, Turn, Window},
    io::read_points_csv,
    settings::Settings,
    surveying::{
        AngleDirection, BearingDirection, DeflectionDirection, Direction, Distance, FeatureId,
        OffsetDistance, OffsetPoint, ParallelDirection, PointStore,
    },
    units::{DistanceUnit, Length, RadianValue},
    Error, Result,
};

/// Angles are entered in decimal degrees or as dash separated DMS.
fn parse_angle(s: &str) -> std::result::Result<RadianValue, String> {
    RadianValue::parse(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "parcel_cogo_cli", version)]
struct Cli {
    /// JSON file with tolerances and units
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

/// Optional extras for commands that resolve a direction.
#[derive(Args)]
struct RayArgs {
    /// Distance along the direction to a new point (e.g. 25.5 or 100ft)
    #[arg(long)]
    distance: Option<String>,
    /// Offset distance from the direction line
    #[arg(long)]
    offset: Option<String>,
    /// Apply the offset to the left instead of the right
    #[arg(long, requires = "offset")]
    left: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bearing from one position to another.
    #[command(allow_negative_numbers = true)]
    Bearing { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Position at a bearing and distance from an origin.
    #[command(allow_negative_numbers = true)]
    Polar {
        x: f64,
        y: f64,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        bearing: RadianValue,
        distance: String,
    },
    /// Rotate a position clockwise about an origin (negative angles rotate
    /// counter-clockwise).
    #[command(allow_negative_numbers = true)]
    Rotate {
        ox: f64,
        oy: f64,
        x: f64,
        y: f64,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        angle: RadianValue,
    },
    /// Foot of the perpendicular from a position to a segment.
    #[command(allow_negative_numbers = true)]
    Perpendicular {
        x: f64,
        y: f64,
        xs: f64,
        ys: f64,
        xe: f64,
        ye: f64,
    },
    /// Signed distance from a line given by a position and bearing.
    #[command(allow_negative_numbers = true)]
    SignedDistance {
        x: f64,
        y: f64,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        bearing: RadianValue,
        xoff: f64,
        yoff: f64,
    },
    /// Check whether a position falls in the sector of a clockwise arc.
    #[command(allow_negative_numbers = true)]
    InSector {
        x: f64,
        y: f64,
        cx: f64,
        cy: f64,
        sx: f64,
        sy: f64,
        ex: f64,
        ey: f64,
        /// Angular tolerance at the ends of the arc (defaults to the settings)
        #[arg(long, value_parser = parse_angle)]
        tolerance: Option<RadianValue>,
    },
    /// Quadrant and IJ deltas of a position relative to an origin.
    #[command(allow_negative_numbers = true)]
    Quadrant { ox: f64, oy: f64, x: f64, y: f64 },
    /// Clockwise angle at an origin from a reference position to a target.
    #[command(allow_negative_numbers = true)]
    Turn {
        ox: f64,
        oy: f64,
        rx: f64,
        ry: f64,
        x: f64,
        y: f64,
    },
    /// Direction from an angle turned off a backsight.
    AngleDirection {
        points: PathBuf,
        backsight: String,
        from: String,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        angle: RadianValue,
        #[command(flatten)]
        ray: RayArgs,
    },
    /// Direction from an angle turned off the prolongation of a backsight.
    DeflectionDirection {
        points: PathBuf,
        backsight: String,
        from: String,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        angle: RadianValue,
        #[command(flatten)]
        ray: RayArgs,
    },
    /// Direction parallel to the line between two points.
    ParallelDirection {
        points: PathBuf,
        from: String,
        start: String,
        end: String,
        #[command(flatten)]
        ray: RayArgs,
    },
    /// Signed offset of a point from a direction with a known bearing.
    OffsetPoint {
        points: PathBuf,
        from: String,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        bearing: RadianValue,
        point: String,
    },
    /// Intersection of two bearing rays.
    #[command(allow_negative_numbers = true)]
    Intersect {
        x1: f64,
        y1: f64,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        b1: RadianValue,
        x2: f64,
        y2: f64,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        b2: RadianValue,
    },
    /// Extent of the points in a file.
    Window {
        points: PathBuf,
        /// Margin as a fraction of each side (0.1 adds 10%)
        #[arg(long, allow_negative_numbers = true)]
        expand: Option<f64>,
    },
    /// Convert a distance to whole microns.
    Microns {
        #[arg(allow_hyphen_values = true)]
        distance: String,
    },
}

fn load_points(path: &Path) -> Result<PointStore> {
    let mut store = PointStore::new();
    read_points_csv(path, &mut store)?;
    Ok(store)
}

fn find(store: &PointStore, name: &str) -> Result<FeatureId> {
    store
        .find_by_name(name)
        .ok_or_else(|| Error::UnknownPoint(name.to_string()))
}

fn print_bearing(label: &str, b: RadianValue) {
    println!("{}: {}", label, b);
    println!("Radians: {:.6}", b.radians());
}

/// Prints a resolved direction, and the positions the ray options ask for.
fn print_direction(
    mut dir: Direction,
    ray: &RayArgs,
    store: &PointStore,
    settings: &Settings,
) -> Result<()> {
    if let Some(offset) = &ray.offset {
        let d = Distance::parse(offset, settings.entry_unit)?;
        dir.set_offset(Some(OffsetDistance::new(d, ray.left).into()));
    }
    print_bearing("Bearing", dir.bearing(store));
    if ray.offset.is_some() {
        if let Some(start) = dir.start_position(store) {
            println!("Start: {}", start);
        }
    }
    if let Some(distance) = &ray.distance {
        let d = Distance::parse(distance, settings.entry_unit)?;
        if let Some(p) = dir.position_at(d.meters(), store) {
            println!("Point: {}", p);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load_or_default(cli.settings.as_deref());
    let show = |meters: f64| settings.display_unit.format(meters, true, None);

    match cli.command {
        Commands::Bearing { x1, y1, x2, y2 } => {
            let (p, q) = (Position::new(x1, y1), Position::new(x2, y2));
            if p.is_at(&q, settings.coincidence_tolerance) {
                warn!("positions coincide, bearing is undefined");
            }
            print_bearing("Bearing", basic::bearing(&p, &q));
            println!("Distance: {}", show(basic::distance(&p, &q)));
        }
        Commands::Polar {
            x,
            y,
            bearing,
            distance,
        } => {
            let d = Distance::parse(&distance, settings.entry_unit)?;
            let p = basic::polar(&Position::new(x, y), bearing.radians(), d.meters());
            println!("Point: {}", p);
        }
        Commands::Rotate { ox, oy, x, y, angle } => {
            let p = basic::rotate(&Position::new(ox, oy), &Position::new(x, y), angle);
            println!("Point: {}", p);
        }
        Commands::Perpendicular {
            x,
            y,
            xs,
            ys,
            xe,
            ye,
        } => {
            let foot = basic::get_perpendicular(x, y, xs, ys, xe, ye);
            let dsq = basic::distance_squared_to_segment(x, y, xs, ys, xe, ye);
            println!("Foot: {}", foot);
            println!("Distance: {}", show(dsq.sqrt()));
        }
        Commands::SignedDistance {
            x,
            y,
            bearing,
            xoff,
            yoff,
        } => {
            let d = basic::signed_distance(x, y, bearing.radians(), xoff, yoff);
            println!("Signed distance: {:.3}", d);
            println!("Side: {}", side(d, settings.coincidence_tolerance));
        }
        Commands::InSector {
            x,
            y,
            cx,
            cy,
            sx,
            sy,
            ex,
            ey,
            tolerance,
        } => {
            let tol = tolerance.map_or(settings.angular_tolerance(), |t| t.radians());
            let inside = basic::is_in_sector(
                &Position::new(x, y),
                &Position::new(cx, cy),
                &Position::new(sx, sy),
                &Position::new(ex, ey),
                tol,
            );
            println!("In sector: {}", inside);
        }
        Commands::Quadrant { ox, oy, x, y } => {
            let qv = QuadVertex::new(Position::new(ox, oy), Position::new(x, y));
            let (di, dj) = qv.deltas();
            println!("Quadrant: {}", qv.quadrant());
            println!("Deltas: {:.3},{:.3}", di, dj);
            print_bearing("Bearing", qv.bearing());
        }
        Commands::Turn {
            ox,
            oy,
            rx,
            ry,
            x,
            y,
        } => {
            let turn = Turn::new(Position::new(ox, oy), Position::new(rx, ry));
            let angle = turn.angle_to_position(&Position::new(x, y), settings.angular_tolerance());
            print_bearing("Angle", angle);
        }
        Commands::AngleDirection {
            points,
            backsight,
            from,
            angle,
            ray,
        } => {
            let store = load_points(&points)?;
            let d = AngleDirection::new(find(&store, &backsight)?, find(&store, &from)?, angle);
            print_direction(d.into(), &ray, &store, &settings)?;
        }
        Commands::DeflectionDirection {
            points,
            backsight,
            from,
            angle,
            ray,
        } => {
            let store = load_points(&points)?;
            let d =
                DeflectionDirection::new(find(&store, &backsight)?, find(&store, &from)?, angle);
            print_direction(d.into(), &ray, &store, &settings)?;
        }
        Commands::ParallelDirection {
            points,
            from,
            start,
            end,
            ray,
        } => {
            let store = load_points(&points)?;
            let d = ParallelDirection::new(
                find(&store, &from)?,
                find(&store, &start)?,
                find(&store, &end)?,
            );
            print_direction(d.into(), &ray, &store, &settings)?;
        }
        Commands::OffsetPoint {
            points,
            from,
            bearing,
            point,
        } => {
            let store = load_points(&points)?;
            let dir = Direction::from(BearingDirection::new(find(&store, &from)?, bearing))
                .with_offset(OffsetPoint::new(find(&store, &point)?));
            let offset = dir.metric_offset(&store);
            println!("Offset: {:.3}", offset);
            println!("Side: {}", side(offset, settings.coincidence_tolerance));
        }
        Commands::Intersect {
            x1,
            y1,
            b1,
            x2,
            y2,
            b2,
        } => {
            let mut store = PointStore::new();
            let a = store.add_point("1", Position::new(x1, y1));
            let b = store.add_point("2", Position::new(x2, y2));
            let d1 = Direction::from(BearingDirection::new(a, b1));
            let d2 = Direction::from(BearingDirection::new(b, b2));
            match d1.intersect(&d2, &store) {
                Some(p) => println!("Intersection: {}", p),
                None => println!("Intersection: none (directions are parallel)"),
            }
        }
        Commands::Window { points, expand } => {
            let store = load_points(&points)?;
            let mut w: Window = store.extent();
            if let Some(factor) = expand {
                w.expand(factor);
            }
            println!("Points: {}", store.len());
            println!("Window: {}", w);
            if let (Some(width), Some(height)) = (w.width(), w.height()) {
                println!("Width: {}", show(width));
                println!("Height: {}", show(height));
            }
        }
        Commands::Microns { distance } => {
            let d = Distance::parse(&distance, settings.entry_unit)?;
            let len = Length::new(d.meters());
            println!("Microns: {}", len.microns());
            println!("Meters: {}", DistanceUnit::Meters.format(len.meters(), false, Some(6)));
        }
    }
    Ok(())
}

fn side(offset: f64, tol: f64) -> &'static str {
    if offset.abs() <= tol {
        "on line"
    } else if offset < 0.0 {
        "left"
    } else {
        "right"
    }
}

fn main() {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
