//! Catalog of NWS alert event types.
//!
//! The id of every entry is the slug of its label, so an alert's `event`
//! field maps onto a catalog id with [`crate::alert::slugify`].

use crate::plugin::Choice;

/// A selectable NWS event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventType {
    pub id: &'static str,
    pub label: &'static str,
}

impl EventType {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Every event type the NWS alert API can emit, in display order.
pub static EVENT_TYPES: &[EventType] = &[
    EventType::new("911TelephoneOutageEmergency", "911 Telephone Outage Emergency"),
    EventType::new("AdministrativeMessage", "Administrative Message"),
    EventType::new("AirQualityAlert", "Air Quality Alert"),
    EventType::new("AirStagnationAdvisory", "Air Stagnation Advisory"),
    EventType::new("ArroyoandSmallStreamFloodAdvisory", "Arroyo and Small Stream Flood Advisory"),
    EventType::new("AshfallAdvisory", "Ashfall Advisory"),
    EventType::new("AshfallWarning", "Ashfall Warning"),
    EventType::new("AvalancheAdvisory", "Avalanche Advisory"),
    EventType::new("AvalancheWarning", "Avalanche Warning"),
    EventType::new("AvalancheWatch", "Avalanche Watch"),
    EventType::new("BeachHazardsStatement", "Beach Hazards Statement"),
    EventType::new("BlizzardWarning", "Blizzard Warning"),
    EventType::new("BlizzardWatch", "Blizzard Watch"),
    EventType::new("BlowingDustAdvisory", "Blowing Dust Advisory"),
    EventType::new("BlowingDustWarning", "Blowing Dust Warning"),
    EventType::new("BriskWindAdvisory", "Brisk Wind Advisory"),
    EventType::new("ChildAbductionEmergency", "Child Abduction Emergency"),
    EventType::new("CivilDangerWarning", "Civil Danger Warning"),
    EventType::new("CivilEmergencyMessage", "Civil Emergency Message"),
    EventType::new("CoastalFloodAdvisory", "Coastal Flood Advisory"),
    EventType::new("CoastalFloodStatement", "Coastal Flood Statement"),
    EventType::new("CoastalFloodWarning", "Coastal Flood Warning"),
    EventType::new("CoastalFloodWatch", "Coastal Flood Watch"),
    EventType::new("DenseFogAdvisory", "Dense Fog Advisory"),
    EventType::new("DenseSmokeAdvisory", "Dense Smoke Advisory"),
    EventType::new("DustAdvisory", "Dust Advisory"),
    EventType::new("DustStormWarning", "Dust Storm Warning"),
    EventType::new("EarthquakeWarning", "Earthquake Warning"),
    EventType::new("EvacuationImmediate", "Evacuation - Immediate"),
    EventType::new("ExcessiveHeatWarning", "Excessive Heat Warning"),
    EventType::new("ExcessiveHeatWatch", "Excessive Heat Watch"),
    EventType::new("ExtremeColdWarning", "Extreme Cold Warning"),
    EventType::new("ExtremeColdWatch", "Extreme Cold Watch"),
    EventType::new("ExtremeFireDanger", "Extreme Fire Danger"),
    EventType::new("ExtremeHeatWarning", "Extreme Heat Warning"),
    EventType::new("ExtremeHeatWatch", "Extreme Heat Watch"),
    EventType::new("ExtremeWindWarning", "Extreme Wind Warning"),
    EventType::new("FireWarning", "Fire Warning"),
    EventType::new("FireWeatherWatch", "Fire Weather Watch"),
    EventType::new("FlashFloodStatement", "Flash Flood Statement"),
    EventType::new("FlashFloodWarning", "Flash Flood Warning"),
    EventType::new("FlashFloodWatch", "Flash Flood Watch"),
    EventType::new("FloodAdvisory", "Flood Advisory"),
    EventType::new("FloodStatement", "Flood Statement"),
    EventType::new("FloodWarning", "Flood Warning"),
    EventType::new("FloodWatch", "Flood Watch"),
    EventType::new("FreezeWarning", "Freeze Warning"),
    EventType::new("FreezeWatch", "Freeze Watch"),
    EventType::new("FreezingFogAdvisory", "Freezing Fog Advisory"),
    EventType::new("FreezingRainAdvisory", "Freezing Rain Advisory"),
    EventType::new("FreezingSprayAdvisory", "Freezing Spray Advisory"),
    EventType::new("FrostAdvisory", "Frost Advisory"),
    EventType::new("GaleWarning", "Gale Warning"),
    EventType::new("GaleWatch", "Gale Watch"),
    EventType::new("HardFreezeWarning", "Hard Freeze Warning"),
    EventType::new("HardFreezeWatch", "Hard Freeze Watch"),
    EventType::new("HazardousMaterialsWarning", "Hazardous Materials Warning"),
    EventType::new("HazardousSeasWarning", "Hazardous Seas Warning"),
    EventType::new("HazardousSeasWatch", "Hazardous Seas Watch"),
    EventType::new("HazardousWeatherOutlook", "Hazardous Weather Outlook"),
    EventType::new("HeatAdvisory", "Heat Advisory"),
    EventType::new("HeavyFreezingSprayWarning", "Heavy Freezing Spray Warning"),
    EventType::new("HeavyFreezingSprayWatch", "Heavy Freezing Spray Watch"),
    EventType::new("HighSurfAdvisory", "High Surf Advisory"),
    EventType::new("HighSurfWarning", "High Surf Warning"),
    EventType::new("HighWindWarning", "High Wind Warning"),
    EventType::new("HighWindWatch", "High Wind Watch"),
    EventType::new("HurricaneForceWindWarning", "Hurricane Force Wind Warning"),
    EventType::new("HurricaneForceWindWatch", "Hurricane Force Wind Watch"),
    EventType::new("HurricaneLocalStatement", "Hurricane Local Statement"),
    EventType::new("HurricaneWarning", "Hurricane Warning"),
    EventType::new("HurricaneWatch", "Hurricane Watch"),
    EventType::new("HydrologicAdvisory", "Hydrologic Advisory"),
    EventType::new("HydrologicOutlook", "Hydrologic Outlook"),
    EventType::new("IceStormWarning", "Ice Storm Warning"),
    EventType::new("LakeEffectSnowAdvisory", "Lake Effect Snow Advisory"),
    EventType::new("LakeEffectSnowWarning", "Lake Effect Snow Warning"),
    EventType::new("LakeEffectSnowWatch", "Lake Effect Snow Watch"),
    EventType::new("LakeWindAdvisory", "Lake Wind Advisory"),
    EventType::new("LakeshoreFloodAdvisory", "Lakeshore Flood Advisory"),
    EventType::new("LakeshoreFloodStatement", "Lakeshore Flood Statement"),
    EventType::new("LakeshoreFloodWarning", "Lakeshore Flood Warning"),
    EventType::new("LakeshoreFloodWatch", "Lakeshore Flood Watch"),
    EventType::new("LawEnforcementWarning", "Law Enforcement Warning"),
    EventType::new("LocalAreaEmergency", "Local Area Emergency"),
    EventType::new("LowWaterAdvisory", "Low Water Advisory"),
    EventType::new("MarineWeatherStatement", "Marine Weather Statement"),
    EventType::new("NuclearPowerPlantWarning", "Nuclear Power Plant Warning"),
    EventType::new("RadiologicalHazardWarning", "Radiological Hazard Warning"),
    EventType::new("RedFlagWarning", "Red Flag Warning"),
    EventType::new("RipCurrentStatement", "Rip Current Statement"),
    EventType::new("SevereThunderstormWarning", "Severe Thunderstorm Warning"),
    EventType::new("SevereThunderstormWatch", "Severe Thunderstorm Watch"),
    EventType::new("SevereWeatherStatement", "Severe Weather Statement"),
    EventType::new("ShelterInPlaceWarning", "Shelter In Place Warning"),
    EventType::new("ShortTermForecast", "Short Term Forecast"),
    EventType::new("SmallCraftAdvisory", "Small Craft Advisory"),
    EventType::new("SmallCraftAdvisoryForHazardousSeas", "Small Craft Advisory For Hazardous Seas"),
    EventType::new("SmallCraftAdvisoryForRoughBar", "Small Craft Advisory For Rough Bar"),
    EventType::new("SmallCraftAdvisoryForWinds", "Small Craft Advisory For Winds"),
    EventType::new("SmallStreamFloodAdvisory", "Small Stream Flood Advisory"),
    EventType::new("SnowSquallWarning", "Snow Squall Warning"),
    EventType::new("SpecialMarineWarning", "Special Marine Warning"),
    EventType::new("SpecialWeatherStatement", "Special Weather Statement"),
    EventType::new("StormSurgeWarning", "Storm Surge Warning"),
    EventType::new("StormSurgeWatch", "Storm Surge Watch"),
    EventType::new("StormWarning", "Storm Warning"),
    EventType::new("StormWatch", "Storm Watch"),
    EventType::new("Test", "Test"),
    EventType::new("TornadoWarning", "Tornado Warning"),
    EventType::new("TornadoWatch", "Tornado Watch"),
    EventType::new("TropicalDepressionLocalStatement", "Tropical Depression Local Statement"),
    EventType::new("TropicalStormLocalStatement", "Tropical Storm Local Statement"),
    EventType::new("TropicalStormWarning", "Tropical Storm Warning"),
    EventType::new("TropicalStormWatch", "Tropical Storm Watch"),
    EventType::new("TsunamiAdvisory", "Tsunami Advisory"),
    EventType::new("TsunamiWarning", "Tsunami Warning"),
    EventType::new("TsunamiWatch", "Tsunami Watch"),
    EventType::new("TyphoonLocalStatement", "Typhoon Local Statement"),
    EventType::new("TyphoonWarning", "Typhoon Warning"),
    EventType::new("TyphoonWatch", "Typhoon Watch"),
    EventType::new("UrbanandSmallStreamFloodAdvisory", "Urban and Small Stream Flood Advisory"),
    EventType::new("VolcanoWarning", "Volcano Warning"),
    EventType::new("WindAdvisory", "Wind Advisory"),
    EventType::new("WindChillAdvisory", "Wind Chill Advisory"),
    EventType::new("WindChillWarning", "Wind Chill Warning"),
    EventType::new("WindChillWatch", "Wind Chill Watch"),
    EventType::new("WinterStormWarning", "Winter Storm Warning"),
    EventType::new("WinterStormWatch", "Winter Storm Watch"),
    EventType::new("WinterWeatherAdvisory", "Winter Weather Advisory"),
];

/// First catalog entry, used as the default selection.
pub fn default_event_type() -> &'static str {
    EVENT_TYPES[0].id
}

/// Look up an event type by id.
pub fn find(id: &str) -> Option<&'static EventType> {
    EVENT_TYPES.iter().find(|event_type| event_type.id == id)
}

/// Display label for an id, falling back to the id itself.
pub fn label_for(id: &str) -> &str {
    find(id).map(|event_type| event_type.label).unwrap_or(id)
}

/// Catalog as dropdown choices.
pub fn choices() -> Vec<Choice> {
    EVENT_TYPES
        .iter()
        .map(|event_type| Choice::new(event_type.id, event_type.label))
        .collect()
}
