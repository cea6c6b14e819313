use serde_json::{json, Value};

use super::*;

fn position(pos: MapPoint) -> Value {
    json!([pos.lng(), pos.lat()])
}

fn marker_feature(marker: &Marker) -> Value {
    let mut properties = json!({
        "kind": "marker",
        "place_id": marker.place_id.as_str(),
        "title": marker.title,
        "draggable": marker.draggable,
    });
    match &marker.icon {
        MarkerIcon::Pin { size } => {
            properties["icon"] = json!({ "type": "pin", "size": [size.0, size.1] });
        }
        MarkerIcon::Numbered {
            number,
            color,
            size,
        } => {
            properties["icon"] = json!({
                "type": "numbered",
                "number": number,
                "color": color,
                "size": size,
            });
        }
    }
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": position(marker.pos) },
        "properties": properties,
    })
}

fn polyline_feature(line: &Polyline) -> Value {
    let coordinates: Vec<_> = line.coordinates.iter().copied().map(position).collect();
    json!({
        "type": "Feature",
        "geometry": { "type": "LineString", "coordinates": coordinates },
        "properties": {
            "kind": "path",
            "mode": line.mode.map(|m| m.as_ref().to_owned()),
            "routed": line.routed,
            "color": line.style.color,
            "weight": line.style.weight,
            "opacity": line.style.opacity,
            "dash_array": line.style.dash_array,
        },
    })
}

fn indicator_feature(indicator: &TransportIndicator) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": position(indicator.pos) },
        "properties": {
            "kind": "transport",
            "mode": indicator.mode.as_ref(),
            "symbol": indicator.symbol(),
        },
    })
}

fn viewport_json(viewport: &Viewport) -> Value {
    match viewport {
        Viewport::Center { center, zoom } => json!({
            "center": position(*center),
            "zoom": zoom,
        }),
        Viewport::FitBounds { bbox, padding } => {
            let sw = bbox.south_west();
            let ne = bbox.north_east();
            json!({
                "bbox": [sw.lng(), sw.lat(), ne.lng(), ne.lat()],
                "padding": padding,
            })
        }
    }
}

impl Scene {
    /// A GeoJSON `FeatureCollection` of the scene.
    ///
    /// Polylines come first so that markers are drawn on top.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<_> = self
            .polylines
            .iter()
            .map(polyline_feature)
            .chain(self.indicators.iter().map(indicator_feature))
            .chain(self.markers.iter().map(marker_feature))
            .collect();
        json!({
            "type": "FeatureCollection",
            "features": features,
            "viewport": viewport_json(&self.viewport),
        })
    }
}
