use std::path::Path;

use geojson::{feature::Id, Feature, GeoJson};
use serde::Deserialize;

use crate::{
    import::ImportError,
    model::{GeofenceDefinition, GeofenceId, TimeRestriction, ZoneType},
};

/// geofence attributes carried in the properties of a GeoJSON feature.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ZoneProperties {
    #[serde(default)]
    id: Option<GeofenceId>,
    name: String,
    zone_type: ZoneType,
    #[serde(default = "crate::model::default_price_modifier")]
    price_modifier: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    time_restriction: Option<TimeRestriction>,
}

/// reads geofence definitions from a file, see [`definitions_from_str`].
pub fn read_definitions(path: &Path) -> Result<Vec<GeofenceDefinition>, ImportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ImportError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let definitions = definitions_from_str(&contents)?;
    log::info!(
        "read {} geofence definitions from {}",
        definitions.len(),
        path.display()
    );
    Ok(definitions)
}

/// parses geofence definitions from either
///   - a JSON array of geofence definitions, or
///   - a GeoJSON FeatureCollection of Polygon features whose properties describe
///     each geofence. positions are [lng, lat] per GeoJSON and only the exterior
///     ring is used.
///
/// definitions are not validated here; that happens when they enter the zone store.
pub fn definitions_from_str(contents: &str) -> Result<Vec<GeofenceDefinition>, ImportError> {
    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(contents).map_err(|e| ImportError::Parse(e.to_string()));
    }
    let geojson = contents
        .parse::<GeoJson>()
        .map_err(|e| ImportError::Parse(e.to_string()))?;
    match geojson {
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| definition_from_feature(index, feature))
            .collect(),
        _ => Err(ImportError::Parse(String::from(
            "geojson zones must be a FeatureCollection",
        ))),
    }
}

fn definition_from_feature(
    index: usize,
    feature: &Feature,
) -> Result<GeofenceDefinition, ImportError> {
    let feature_error = |message: String| ImportError::Feature { index, message };

    let properties = feature
        .properties
        .clone()
        .ok_or_else(|| feature_error(String::from("feature has no properties")))?;
    let props: ZoneProperties = serde_json::from_value(serde_json::Value::Object(properties))
        .map_err(|e| feature_error(format!("invalid properties: {e}")))?;

    let id = match (props.id, &feature.id) {
        (Some(id), _) => id,
        (None, Some(Id::String(s))) => GeofenceId(s.clone()),
        (None, Some(Id::Number(n))) => GeofenceId(n.to_string()),
        (None, None) => return Err(feature_error(String::from("feature has no id"))),
    };

    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| feature_error(format!("no geometry for geofence '{id}'")))?;
    let exterior = match &geometry.value {
        geojson::Value::Polygon(rings) => rings
            .first()
            .ok_or_else(|| feature_error(format!("polygon for geofence '{id}' has no rings")))?,
        _ => {
            return Err(feature_error(format!(
                "geometry for geofence '{id}' must be a Polygon"
            )))
        }
    };
    let polygon = exterior
        .iter()
        .map(|position| match position.as_slice() {
            [lng, lat, ..] => Ok([*lat, *lng]),
            _ => Err(feature_error(format!(
                "geofence '{id}' has a position with fewer than 2 values"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GeofenceDefinition {
        id,
        name: props.name,
        zone_type: props.zone_type,
        polygon,
        time_restriction: props.time_restriction,
        price_modifier: props.price_modifier,
        description: props.description,
    })
}
