extern crate poly2geojson;

use geojson::{GeoJson, Value};
use poly2geojson::output::Output;
use poly2geojson::{parse_reader, Feature, Geometry, ParseError, ParseOptions};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};

fn get_string(cursor: &mut Cursor<Vec<u8>>) -> String {
    cursor.seek(SeekFrom::Start(0)).unwrap();
    let mut out = Vec::new();
    cursor.read_to_end(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn parse_file(path: &str) -> Result<Feature, ParseError> {
    let file = File::open(path).unwrap();
    parse_reader(BufReader::new(file), &ParseOptions::default())
}

fn to_geojson(feature: &Feature) -> geojson::Feature {
    let mut cursor = Cursor::new(Vec::new());
    feature.write_geojson(&mut cursor).unwrap();
    let string = get_string(&mut cursor);
    match string.parse::<GeoJson>().unwrap() {
        GeoJson::Feature(feature) => feature,
        _ => panic!("expected a feature"),
    }
}

#[test]
fn single_closed_ring() {
    let feature = parse_file("./tests/data/mitte.poly").unwrap();
    assert_eq!(feature.name(), "mitte");
    match &feature.geometry {
        Geometry::Polygon { coordinates } => {
            assert_eq!(coordinates.len(), 1);
            assert_eq!(coordinates[0].len(), 5);
            assert_eq!(coordinates[0][0], (13.36, 52.5));
            assert_eq!(coordinates[0][4], (13.36, 52.5));
        }
        _ => panic!("expected a polygon"),
    }

    let geojson = to_geojson(&feature);
    let properties = geojson.properties.unwrap();
    assert_eq!(properties["name"], "mitte");
    match geojson.geometry.unwrap().value {
        Value::Polygon(rings) => assert_eq!(rings[0][2], vec![13.42, 52.54]),
        _ => panic!("expected a polygon"),
    }
}

#[test]
fn polygon_with_hole() {
    let feature = parse_file("./tests/data/courtyard.poly").unwrap();
    match to_geojson(&feature).geometry.unwrap().value {
        Value::Polygon(rings) => {
            assert_eq!(rings.len(), 2);
            assert_eq!(rings[0].len(), 5);
            assert_eq!(rings[1].len(), 5);
            assert_eq!(rings[1][0], rings[1][4]);
            assert_eq!(rings[1][0], vec![10.4, 50.4]);
        }
        _ => panic!("expected a polygon"),
    }
}

#[test]
fn islands_become_multi_polygon() {
    let feature = parse_file("./tests/data/islands.poly").unwrap();
    match to_geojson(&feature).geometry.unwrap().value {
        Value::MultiPolygon(polygons) => {
            let rings: Vec<usize> = polygons.iter().map(Vec::len).collect();
            assert_eq!(rings, vec![1, 2, 1]);
            assert_eq!(polygons[0][0].len(), 4);
            assert_eq!(polygons[2][0][3], vec![-1., 50.]);
        }
        _ => panic!("expected a multipolygon"),
    }
}

#[test]
fn bbox_of_islands() {
    let feature = parse_file("./tests/data/islands.poly")
        .unwrap()
        .with_bbox();
    assert_eq!(feature.bbox, Some([-1., 50., 12., 55.]));
    let geojson = to_geojson(&feature);
    assert_eq!(geojson.bbox, Some(vec![-1., 50., 12., 55.]));
}

#[test]
fn ring_with_two_vertices() {
    match parse_file("./tests/data/sliver.poly") {
        Err(ParseError::InvalidRingClosure { line, vertices }) => {
            assert_eq!(line, 5);
            assert_eq!(vertices, 2);
        }
        _ => panic!("expected an invalid ring"),
    }
}

#[test]
fn json_lines_output() {
    let feature = parse_file("./tests/data/courtyard.poly").unwrap();
    let mut cursor = Cursor::new(Vec::new());
    feature.write_json_lines(&mut cursor).unwrap();
    let string = get_string(&mut cursor);
    let lines: Vec<&str> = string.trim().split('\n').collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(r#""name":"courtyard""#));
    assert!(lines[0].contains(r#""type":"Polygon""#));
}

#[test]
fn error_message() {
    let lines = vec!["", "1"];
    let err = poly2geojson::parse(lines, &ParseOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not complete parse: line 1: expected a feature name"
    );
}
