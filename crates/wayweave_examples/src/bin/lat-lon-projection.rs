use wayweave::prelude::*;
use wayweave_examples::{init_tracing, log_summary};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A 1000x1000 game area over a small lat/lon box. The streets form one cluster, so
    // each building ends up with a single connection.
    let metadata = Metadata::new(1000, 1000, 52.5200, 13.4000, 52.5290, 13.4150);
    let lat_span = metadata.max_lat - metadata.min_lat;
    let lon_span = metadata.max_lon - metadata.min_lon;
    let (width, height) = (metadata.width as f64, metadata.height as f64);
    let (min_lat, min_lon) = (metadata.min_lat, metadata.min_lon);
    let projection = move |lat: f64, lon: f64| mint::Point2 {
        x: (lon - min_lon) / lon_span * width,
        y: (lat - min_lat) / lat_span * height,
    };

    let street = |id: u64, nodes: &[u64], coords: &[(f64, f64)]| {
        let geometry: Vec<LatLon> = coords
            .iter()
            .map(|&(lat, lon)| LatLon::new(lat, lon))
            .collect();
        WaySegment::from_lat_lon(id, nodes.to_vec(), &geometry, &projection)
    };

    let roads = vec![
        street(
            1,
            &[10, 11, 12],
            &[(52.5210, 13.4010), (52.5210, 13.4075), (52.5210, 13.4140)],
        ),
        street(
            2,
            &[13, 11, 14],
            &[(52.5205, 13.4075), (52.5210, 13.4075), (52.5280, 13.4075)],
        ),
        street(3, &[15, 14], &[(52.5280, 13.4010), (52.5280, 13.4075)]),
    ];
    let buildings = vec![
        street(
            100,
            &[20, 21, 22, 23],
            &[
                (52.5220, 13.4030),
                (52.5220, 13.4050),
                (52.5235, 13.4050),
                (52.5235, 13.4030),
            ],
        ),
        street(
            101,
            &[24, 25, 26, 27],
            &[
                (52.5250, 13.4090),
                (52.5250, 13.4110),
                (52.5262, 13.4110),
                (52.5262, 13.4090),
            ],
        ),
        street(
            102,
            &[28, 29, 30],
            &[(52.5265, 13.4020), (52.5270, 13.4040), (52.5260, 13.4040)],
        ),
    ];

    let mut world = Container::from_ways(Some(metadata), &roads, &buildings)?;
    let report = synthesize(&mut world, 1.0)?;
    log_summary("projected", &world);

    for building in &world.buildings {
        for connection in building.connections() {
            let road = world
                .roads
                .get(connection.road)
                .ok_or_else(|| anyhow::anyhow!("dangling road key"))?;
            println!(
                "{} -> {} (osm node {}) at {:.1} units",
                building.id, road.id, road.source, connection.distance
            );
        }
    }
    println!("{} passes, {} removed", report.passes, report.removed);

    Ok(())
}
