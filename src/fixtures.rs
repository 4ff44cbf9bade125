//! Shared test data

use chrono::{NaiveDate, Weekday};

use crate::dataset::{Boundaries, Dataset};
use crate::models::{OrderStatus, Shipment};

pub const SHIPMENTS_CSV: &str = "\
order_id,status,ship_mode,province,creation_date,order_day,order_hour,day_to_arv
ORD-001,Completed,STANDARD,Jawa Barat,2023-01-02,Monday,9,2
ORD-002,Pending,STANDARD,Jawa Barat,2023-01-03,Tuesday,14,4
ORD-003,Completed,EXPRESS,Bali,2023-01-02,Monday,9,1
ORD-004,Returned,SAME DAY,Atlantis,2023-01-05 08:30:00,Thursday,20,0.5
";

pub const BOUNDARIES_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "NAME_1": "Jawa Barat", "meta": { "code": "ID-JB" } },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[106.0, -7.8], [108.8, -7.8], [108.8, -5.9], [106.0, -5.9], [106.0, -7.8]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "NAME_1": "Bali", "meta": { "code": "ID-BA" } },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [[[[114.4, -8.9], [115.7, -8.9], [115.7, -8.0], [114.4, -8.0], [114.4, -8.9]]]]
      }
    }
  ]
}"#;

pub fn boundaries() -> Boundaries {
    Boundaries::from_geojson_str(BOUNDARIES_GEOJSON, "NAME_1").unwrap()
}

pub fn dataset() -> Dataset {
    let shipments = crate::dataset::read_shipments(SHIPMENTS_CSV.as_bytes()).unwrap();
    Dataset::new(shipments, boundaries())
}

pub fn shipment(id: &str, mode: &str, status: &str, transit_days: f64) -> Shipment {
    Shipment {
        order_id: id.to_string(),
        status: OrderStatus::from(status),
        ship_mode: mode.to_string(),
        province: "Jawa Barat".to_string(),
        creation_date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
        order_day: Weekday::Mon,
        order_hour: 9,
        transit_days,
    }
}

/// Two STANDARD orders (one completed) and one completed EXPRESS order
pub fn scenario() -> Vec<Shipment> {
    vec![
        shipment("A", "STANDARD", "Completed", 2.0),
        shipment("B", "STANDARD", "Pending", 4.0),
        shipment("C", "EXPRESS", "Completed", 1.0),
    ]
}
