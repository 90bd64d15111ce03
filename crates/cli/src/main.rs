mod input;
mod output;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rectclip::sample::{draw_polygon, ReplayToken, SampleCfg, VertexCount};
use rectclip::{clip_polygon, clip_segment, Point, Polygon, Segment, Window};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::output::ClipReport;
use crate::provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "rectclip")]
#[command(about = "Clip a segment or polygon against an axis-aligned window")]
struct Cmd {
    /// Optional run tag (e.g. a ticket id); propagated to outputs and logs
    #[arg(long, global = true)]
    vk: Option<String>,

    /// Write the JSON result here (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(flatten)]
    window: WindowArgs,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy, Debug)]
struct WindowArgs {
    /// Minimum x-coordinate of the window
    #[arg(long, global = true, default_value_t = -10.0, allow_negative_numbers = true)]
    x_min: f64,
    /// Minimum y-coordinate of the window
    #[arg(long, global = true, default_value_t = -10.0, allow_negative_numbers = true)]
    y_min: f64,
    /// Maximum x-coordinate of the window
    #[arg(long, global = true, default_value_t = 10.0, allow_negative_numbers = true)]
    x_max: f64,
    /// Maximum y-coordinate of the window
    #[arg(long, global = true, default_value_t = 10.0, allow_negative_numbers = true)]
    y_max: f64,
}

impl WindowArgs {
    fn build(self) -> Result<Window> {
        Ok(Window::new(self.x_min, self.y_min, self.x_max, self.y_max)?)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Clip one segment `p1 → p2`
    Segment {
        #[arg(long, value_parser = input::parse_point, allow_hyphen_values = true, default_value = "-5,-5")]
        p1: Point,
        #[arg(long, value_parser = input::parse_point, allow_hyphen_values = true, default_value = "5,5")]
        p2: Point,
    },
    /// Clip a closed polygon edge by edge
    Polygon {
        /// Vertex `x,y`; repeat in loop order
        #[arg(long = "point", value_parser = input::parse_point, allow_hyphen_values = true)]
        points: Vec<Point>,
        /// CSV file with `x` and `y` columns
        #[arg(long, conflicts_with = "points")]
        csv: Option<PathBuf>,
        /// Number of diagonal vertices `(i, i)` when no vertices are given
        #[arg(long, default_value_t = 3, conflicts_with_all = ["points", "csv"])]
        vertices: usize,
    },
    /// Draw a reproducible random polygon and clip it
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Fixed vertex count; drawn from 3..=10 when omitted
        #[arg(long)]
        vertices: Option<usize>,
        #[arg(long, default_value_t = 12.0)]
        radius: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = cmd.out.as_deref();
    match cmd.action {
        Action::Segment { p1, p2 } => segment(cmd.window.build()?, p1, p2, out, cmd.vk),
        Action::Polygon {
            points,
            csv,
            vertices,
        } => {
            let verts = collect_vertices(points, csv.as_deref(), vertices)?;
            polygon(cmd.window.build()?, verts, out, cmd.vk)
        }
        Action::Sample {
            seed,
            index,
            vertices,
            radius,
        } => sample(cmd.window.build()?, seed, index, vertices, radius, out, cmd.vk),
        Action::Report => report(cmd.vk),
    }
}

fn collect_vertices(points: Vec<Point>, csv: Option<&Path>, n: usize) -> Result<Vec<Point>> {
    let verts = match csv {
        Some(path) => input::read_vertices_csv(path)?,
        None if !points.is_empty() => points,
        None => {
            input::check_vertex_count(n)?;
            input::diagonal_vertices(n)
        }
    };
    input::check_vertex_count(verts.len())?;
    Ok(verts)
}

fn segment(
    window: Window,
    p1: Point,
    p2: Point,
    out: Option<&Path>,
    vk: Option<String>,
) -> Result<()> {
    let clipped = clip_segment(&window, p1, p2);
    tracing::info!(
        p1 = ?(p1.x, p1.y),
        p2 = ?(p2.x, p2.y),
        visible = clipped.is_some(),
        vk = ?vk,
        "segment"
    );
    let report = ClipReport::segment(&window, Segment::new(p1, p2), clipped);
    let params = json!({ "mode": "segment", "p1": [p1.x, p1.y], "p2": [p2.x, p2.y] });
    emit(&report, out, Payload::new(&window, params).with_vk(vk))
}

fn polygon(window: Window, verts: Vec<Point>, out: Option<&Path>, vk: Option<String>) -> Result<()> {
    let poly = Polygon::new(verts)?;
    let clipped = clip_polygon(&window, &poly);
    tracing::info!(
        vertices = poly.len(),
        kept_points = clipped.len(),
        vk = ?vk,
        "polygon"
    );
    let report = ClipReport::polygon(&window, poly.vertices(), &clipped);
    let params = json!({ "mode": "polygon", "vertices": poly.len() });
    emit(&report, out, Payload::new(&window, params).with_vk(vk))
}

fn sample(
    window: Window,
    seed: u64,
    index: u64,
    vertices: Option<usize>,
    radius: f64,
    out: Option<&Path>,
    vk: Option<String>,
) -> Result<()> {
    let vertex_count = match vertices {
        Some(n) => {
            input::check_vertex_count(n)?;
            VertexCount::Fixed(n)
        }
        None => VertexCount::Uniform {
            min: *input::VERTEX_RANGE.start(),
            max: *input::VERTEX_RANGE.end(),
        },
    };
    let cfg = SampleCfg {
        vertex_count,
        base_radius: radius,
        ..SampleCfg::default()
    };
    let poly = draw_polygon(cfg, ReplayToken { seed, index });
    let clipped = clip_polygon(&window, &poly);
    tracing::info!(
        seed,
        index,
        vertices = poly.len(),
        kept_points = clipped.len(),
        vk = ?vk,
        "sample"
    );
    let report = ClipReport::polygon(&window, poly.vertices(), &clipped);
    let params = json!({ "mode": "sample", "seed": seed, "index": index, "radius": radius });
    emit(&report, out, Payload::new(&window, params).with_vk(vk))
}

fn emit(report: &ClipReport, out: Option<&Path>, payload: Payload) -> Result<()> {
    let body = serde_json::to_string_pretty(report)?;
    let Some(out) = out else {
        println!("{body}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    let prov = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn report(vk: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "rectclip_version": rectclip::VERSION,
        "vk": vk,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_negative_window_and_points() {
        let cmd = Cmd::try_parse_from([
            "rectclip", "--x-min", "-4", "segment", "--p1", "-15,0", "--p2", "15,0",
        ])
        .unwrap();
        assert_eq!(cmd.window.x_min, -4.0);
        assert_eq!(cmd.window.y_max, 10.0);
        match cmd.action {
            Action::Segment { p1, p2 } => {
                assert_eq!(p1, Point::new(-15.0, 0.0));
                assert_eq!(p2, Point::new(15.0, 0.0));
            }
            _ => panic!("expected segment"),
        }
    }

    #[test]
    fn polygon_defaults_to_diagonal_triangle() {
        let verts = collect_vertices(Vec::new(), None, 3).unwrap();
        assert_eq!(verts, input::diagonal_vertices(3));
        assert!(collect_vertices(Vec::new(), None, 11).is_err());
        assert!(collect_vertices(vec![Point::zeros(); 2], None, 3).is_err());
    }

    #[test]
    fn inverted_window_is_an_error() {
        let args = WindowArgs {
            x_min: 1.0,
            y_min: 0.0,
            x_max: 0.0,
            y_max: 1.0,
        };
        let err = args.build().unwrap_err();
        assert!(err.to_string().contains("invalid window"));
    }

    #[test]
    fn emit_writes_result_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("res").join("clip.json");
        let w = Window::new(-10.0, -10.0, 10.0, 10.0).unwrap();
        let input = Segment::new(Point::new(-5.0, -5.0), Point::new(5.0, 5.0));
        let report = ClipReport::segment(&w, input, Some(input));
        emit(&report, Some(&out), Payload::new(&w, json!({"mode": "segment"}))).unwrap();
        assert!(out.exists());
        let prov = dir.path().join("res").join("clip.provenance.json");
        let doc: serde_json::Value = serde_json::from_slice(&std::fs::read(prov).unwrap()).unwrap();
        assert_eq!(doc["window"]["x_max"], 10.0);
    }

    #[test]
    fn vertices_flag_conflicts_with_explicit_vertices() {
        let with_points =
            Cmd::try_parse_from(["rectclip", "polygon", "--point", "0,0", "--vertices", "4"]);
        assert!(with_points.is_err());
        let with_csv = Cmd::try_parse_from(["rectclip", "polygon", "--csv", "p.csv", "--vertices", "4"]);
        assert!(with_csv.is_err());
        assert!(Cmd::try_parse_from(["rectclip", "polygon", "--vertices", "4"]).is_ok());
    }
}
