//! Road damage heat zone tool
//!
//! Reads damage reports from a CSV file, groups them into heat zones and writes
//! one row per zone.

use clap::Parser;
use csv::{ReaderBuilder, WriterBuilder};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simple_logger::SimpleLogger;
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use heatzone::zone::{
    ClusterPolicy, Coordinate, DamageReport, DamageStatistics, DamageType, HeatZone, Severity,
    ZoneSummary, centroid_and_bounds, create_heat_zones,
};


#[derive(Parser)]
#[command(name = "heatzone")]
#[command(about = "Road damage heat zone clustering tool", long_about = None)]
struct Args {
    /// Input CSV file with id,latitude,longitude,damage_type,severity,confidence columns
    #[arg(short, long, default_value = "damages.csv")]
    input: PathBuf,

    /// Output CSV file with heat zones (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Clustering radius in meters
    #[arg(short, long, default_value_t = 300.0)]
    radius: f64,

    /// Minimum number of reports in a zone
    #[arg(short, long, default_value_t = 3)]
    min_damages: usize,

    /// Print report and zone statistics to stderr
    #[arg(short, long)]
    stats: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Error initializing logger: {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let damages = read_reports(&args.input)?;
    log::debug!("Read {} reports from {:?}", damages.len(), args.input);

    let policy = ClusterPolicy::new(args.radius, args.min_damages);
    let zones = create_heat_zones(&damages, &policy)?;
    log::info!("Found {} heat zones in {} reports", zones.len(), damages.len());

    match &args.output {
        None => write_zones(io::stdout().lock(), &zones)?,
        Some(output_file) => {
            write_zones(File::create(output_file)?, &zones)?;
            log::debug!("Heat zones written to {:?}", output_file);
        }
    }

    if args.stats {
        write_statistics(io::stderr().lock(), &damages, &zones)?;
    }

    Ok(())
}

/// One input row
///
/// Enum tags stay strings here so unknown values surface as clustering errors
/// naming the bad tag.
#[derive(Debug, Deserialize)]
struct ReportRecord {
    id: String,
    latitude: f64,
    longitude: f64,
    damage_type: String,
    severity: String,
    confidence: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    detected_at: String,
    #[serde(default)]
    road_name: Option<String>,
}

impl TryFrom<ReportRecord> for DamageReport {
    type Error = heatzone::ZoneError;

    fn try_from(r: ReportRecord) -> Result<Self, Self::Error> {
        Ok(DamageReport {
            damage_type: DamageType::parse(&r.damage_type)?,
            severity: Severity::parse(&r.severity)?,
            id: r.id,
            coordinate: Coordinate::new(r.latitude, r.longitude),
            confidence: r.confidence,
            description: r.description,
            detected_at: r.detected_at,
            road_name: r.road_name.filter(|s| !s.is_empty()),
        })
    }
}

/// One output row
#[derive(Debug, Serialize)]
struct ZoneRecord<'a> {
    id: &'a str,
    latitude: f64,
    longitude: f64,
    radius: f64,
    damage_count: usize,
    severity: &'static str,
    average_confidence: u32,
    dominant_damage_type: &'static str,
    members: String,
}

impl<'a> From<&'a HeatZone<'_>> for ZoneRecord<'a> {
    fn from(zone: &'a HeatZone<'_>) -> Self {
        ZoneRecord {
            id: &zone.id,
            latitude: zone.center.latitude,
            longitude: zone.center.longitude,
            radius: zone.radius,
            damage_count: zone.damage_count,
            severity: zone.severity.into(),
            average_confidence: zone.average_confidence,
            dominant_damage_type: zone.dominant_damage_type.into(),
            members: zone
                .damages
                .iter()
                .map(|d| d.id.as_str())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

/// Reads damage reports from a CSV file with a header row
///
/// Expected columns: `id,latitude,longitude,damage_type,severity,confidence`,
/// optionally followed by `description,detected_at,road_name`.
fn read_reports(filename: &PathBuf) -> Result<Vec<DamageReport>, Box<dyn Error>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut damages = Vec::new();
    for result in reader.deserialize::<ReportRecord>() {
        damages.push(DamageReport::try_from(result?)?);
    }

    Ok(damages)
}

/// Writes one CSV row per zone, header included
fn write_zones<W: Write>(out: W, zones: &[HeatZone<'_>]) -> Result<(), Box<dyn Error>> {
    let mut writer = WriterBuilder::new().from_writer(out);

    if zones.is_empty() {
        // serialize() only emits the header together with the first record
        writer.write_record([
            "id",
            "latitude",
            "longitude",
            "radius",
            "damage_count",
            "severity",
            "average_confidence",
            "dominant_damage_type",
            "members",
        ])?;
    }

    for zone in zones {
        writer.serialize(ZoneRecord::from(zone))?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes report and zone statistics as plain text
fn write_statistics<W: Write>(
    mut out: W,
    damages: &[DamageReport],
    zones: &[HeatZone<'_>],
) -> io::Result<()> {
    let stats = DamageStatistics::from_reports(damages);
    let summary = ZoneSummary::from_zones(damages.len(), zones);

    writeln!(out, "Reports:             {}", stats.total)?;
    writeln!(
        out,
        "  severe/moderate/none: {}/{}/{}",
        stats.severe_count, stats.moderate_count, stats.none_count
    )?;
    writeln!(out, "  average confidence: {}", stats.average_confidence)?;
    if let Some(t) = stats.most_common_type {
        writeln!(out, "  most common type:   {}", t)?;
    }
    for share in stats.type_breakdown.iter().filter(|s| s.count > 0) {
        writeln!(
            out,
            "    {:<14} {:>4} ({:.1}%)",
            share.damage_type.to_string(),
            share.count,
            share.percentage
        )?;
    }

    writeln!(out, "Zones:               {}", summary.zone_count)?;
    writeln!(out, "  severe zones:       {}", summary.severe_zones)?;
    writeln!(out, "  largest zone:       {}", summary.largest_zone)?;
    writeln!(
        out,
        "  clustered/unclustered: {}/{}",
        summary.clustered, summary.unclustered
    )?;

    for zone in zones {
        let (_, min, max) = centroid_and_bounds(zone.damages.iter().map(|d| d.coordinate));
        writeln!(
            out,
            "  {}: ({:.5}, {:.5})-({:.5}, {:.5})",
            zone.id, min.latitude, min.longitude, max.latitude, max.longitude
        )?;
    }

    out.flush()
}
