// ---------------------------------------------------------------------------
// Coarse world basemap for the bubble map
// ---------------------------------------------------------------------------

/// A closed outline of `[longitude, latitude]` vertices.
pub struct Outline {
    pub name: &'static str,
    pub points: &'static [[f64; 2]],
}

/// A labelled reference line drawn under the coastlines.
pub struct ReferenceLine {
    pub label: &'static str,
    pub from: [f64; 2],
    pub to: [f64; 2],
}

pub const REFERENCE_LINES: [ReferenceLine; 4] = [
    ReferenceLine {
        label: "Equator",
        from: [-180.0, 0.0],
        to: [180.0, 0.0],
    },
    ReferenceLine {
        label: "Tropic of Cancer",
        from: [-180.0, 23.44],
        to: [180.0, 23.44],
    },
    ReferenceLine {
        label: "Tropic of Capricorn",
        from: [-180.0, -23.44],
        to: [180.0, -23.44],
    },
    ReferenceLine {
        label: "Prime meridian",
        from: [0.0, -90.0],
        to: [0.0, 90.0],
    },
];

/// Land masses, simplified to a few dozen vertices each.
pub const CONTINENTS: [Outline; 7] = [
    Outline {
        name: "North America",
        points: &[
            [-168.0, 65.0], [-162.0, 70.0], [-140.0, 70.0], [-125.0, 70.0], [-95.0, 72.0],
            [-80.0, 73.0], [-62.0, 60.0], [-55.0, 52.0], [-66.0, 45.0], [-70.0, 41.0],
            [-76.0, 35.0], [-81.0, 31.0], [-80.0, 25.0], [-82.0, 28.0], [-90.0, 30.0],
            [-97.0, 27.0], [-97.0, 21.0], [-87.0, 21.0], [-88.0, 16.0], [-83.0, 10.0],
            [-78.0, 8.0], [-80.0, 7.0], [-86.0, 12.0], [-92.0, 15.0], [-105.0, 20.0],
            [-110.0, 23.0], [-112.0, 30.0], [-117.0, 32.0], [-122.0, 37.0], [-124.0, 42.0],
            [-124.0, 48.0], [-130.0, 55.0], [-140.0, 60.0], [-152.0, 60.0], [-165.0, 62.0],
            [-168.0, 65.0],
        ],
    },
    Outline {
        name: "South America",
        points: &[
            [-78.0, 8.0], [-72.0, 12.0], [-62.0, 11.0], [-52.0, 5.0], [-50.0, 0.0],
            [-35.0, -5.0], [-35.0, -9.0], [-39.0, -15.0], [-41.0, -22.0], [-48.0, -26.0],
            [-53.0, -34.0], [-58.0, -38.0], [-65.0, -41.0], [-65.0, -47.0], [-69.0, -52.0],
            [-68.0, -55.0], [-74.0, -53.0], [-75.0, -46.0], [-73.0, -37.0], [-71.0, -30.0],
            [-70.0, -18.0], [-76.0, -14.0], [-81.0, -6.0], [-80.0, 0.0], [-77.0, 4.0],
            [-78.0, 8.0],
        ],
    },
    Outline {
        name: "Africa",
        points: &[
            [-17.0, 21.0], [-13.0, 28.0], [-9.0, 33.0], [-6.0, 36.0], [10.0, 37.0],
            [11.0, 33.0], [20.0, 31.0], [32.0, 31.0], [34.0, 28.0], [39.0, 16.0],
            [43.0, 12.0], [51.0, 12.0], [48.0, 5.0], [40.0, -5.0], [40.0, -15.0],
            [35.0, -24.0], [32.0, -29.0], [27.0, -34.0], [20.0, -35.0], [18.0, -32.0],
            [12.0, -18.0], [13.0, -10.0], [9.0, -1.0], [9.0, 4.0], [4.0, 6.0],
            [-8.0, 4.0], [-13.0, 8.0], [-17.0, 14.0], [-17.0, 21.0],
        ],
    },
    Outline {
        name: "Eurasia",
        points: &[
            [-9.0, 43.0], [-9.0, 39.0], [-6.0, 36.0], [-2.0, 37.0], [3.0, 43.0],
            [12.0, 44.0], [16.0, 38.0], [18.0, 40.0], [13.0, 45.0], [19.0, 42.0],
            [23.0, 37.0], [26.0, 40.0], [28.0, 41.0], [36.0, 36.0], [35.0, 32.0],
            [43.0, 13.0], [52.0, 16.0], [57.0, 20.0], [56.0, 26.0], [50.0, 30.0],
            [57.0, 25.0], [66.0, 25.0], [73.0, 20.0], [77.0, 8.0], [80.0, 15.0],
            [88.0, 22.0], [94.0, 17.0], [98.0, 8.0], [101.0, 3.0], [104.0, 1.0],
            [101.0, 13.0], [106.0, 9.0], [109.0, 12.0], [107.0, 21.0], [113.0, 22.0],
            [120.0, 26.0], [122.0, 31.0], [120.0, 36.0], [122.0, 40.0], [126.0, 37.0],
            [129.0, 35.0], [129.0, 41.0], [135.0, 43.0], [141.0, 48.0], [141.0, 53.0],
            [136.0, 55.0], [143.0, 59.0], [156.0, 57.0], [163.0, 60.0], [178.0, 64.0],
            [180.0, 69.0], [160.0, 70.0], [140.0, 72.0], [114.0, 74.0], [104.0, 78.0],
            [88.0, 75.0], [70.0, 73.0], [60.0, 69.0], [44.0, 68.0], [33.0, 70.0],
            [20.0, 70.0], [14.0, 66.0], [5.0, 62.0], [8.0, 58.0], [12.0, 56.0],
            [8.0, 54.0], [5.0, 53.0], [2.0, 51.0], [-5.0, 48.0], [-1.0, 46.0],
            [-2.0, 43.0], [-9.0, 43.0],
        ],
    },
    Outline {
        name: "Australia",
        points: &[
            [114.0, -22.0], [114.0, -34.0], [117.0, -35.0], [124.0, -34.0], [131.0, -31.0],
            [138.0, -35.0], [141.0, -38.0], [146.0, -39.0], [150.0, -37.0], [153.0, -30.0],
            [153.0, -25.0], [146.0, -19.0], [142.0, -11.0], [141.0, -17.0], [136.0, -12.0],
            [131.0, -12.0], [126.0, -14.0], [122.0, -18.0], [114.0, -22.0],
        ],
    },
    Outline {
        name: "Greenland",
        points: &[
            [-55.0, 60.0], [-43.0, 60.0], [-35.0, 66.0], [-22.0, 70.0], [-18.0, 77.0],
            [-30.0, 83.0], [-55.0, 82.0], [-70.0, 78.0], [-58.0, 75.0], [-53.0, 68.0],
            [-55.0, 60.0],
        ],
    },
    Outline {
        name: "Great Britain",
        points: &[
            [-5.0, 50.0], [1.0, 51.0], [2.0, 53.0], [-2.0, 56.0], [-3.0, 59.0],
            [-6.0, 58.0], [-5.0, 55.0], [-3.0, 54.0], [-5.0, 52.0], [-5.0, 50.0],
        ],
    },
];
