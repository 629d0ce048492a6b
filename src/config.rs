// ---------------------------------------------------------------------------
// Compile-time configuration
// ---------------------------------------------------------------------------

/// Location of the dataset, resolved against the crate directory so the
/// binary finds it regardless of the working directory.
pub const DATA_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/healthy_lifestyle_city_2021_with_coords.csv"
);

// -- Column headers the dashboard depends on --

pub const COL_CITY: &str = "City";
pub const COL_RANK: &str = "Rank";
pub const COL_HAPPINESS: &str = "Happiness levels(Country)";
pub const COL_LIFE_EXPECTANCY: &str = "Life expectancy(years) (Country)";
pub const COL_POLLUTION: &str = "Pollution(Index score) (City)";
pub const COL_WATER_COST: &str = "Cost of a bottle of water(City)";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";

/// Columns shown in the details table on first render.
pub const DEFAULT_TABLE_COLUMNS: [&str; 4] = [COL_CITY, COL_RANK, COL_HAPPINESS, COL_WATER_COST];

// -- Map marker sizing --

/// Largest marker radius in points; reached by the happiest city.
pub const MAX_MARKER_RADIUS: f32 = 15.0;
/// Radius used when a city has no happiness score.
pub const MIN_MARKER_RADIUS: f32 = 1.0;

// -- Window / labels --

pub const WINDOW_TITLE: &str = "Global City Health Metrics";
pub const WINDOW_SIZE: [f32; 2] = [1400.0, 900.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [800.0, 500.0];

pub const MAP_TITLE: &str = "Life Expectancy of Selected Cities";
pub const MAP_COLOR_LABEL: &str = "Life Expectancy";
pub const MAP_SIZE_LEGEND: &str = "Happiness Level Scale";
pub const MAP_NOTE: &str = "Note: The size of the circle represents the happiness level.";

pub const HAPPINESS_SCATTER_TITLE: &str = "Life Expectancy vs Happiness Levels";
pub const POLLUTION_SCATTER_TITLE: &str = "Pollution vs Cost of a water bottle";
pub const WATER_COST_LABEL: &str = "Cost of a water bottle (£)";
