use glam::Vec3;

// Shared navigation/layout tuning constants used by the host and native runner.

// Navigation defaults
pub const DEFAULT_ZOOM: f32 = 0.3;
pub const DEFAULT_MAX_ITERATIONS: f32 = 2000.0;
pub const DEFAULT_ORTHOGRAPHIC_EXTENT: f32 = 5.0;
pub const DEFAULT_SMOOTH_TIME: f32 = 1.0;

// Navigation rates
pub const SMOOTH_TIME_FLOOR: f32 = 0.01; // lower bound for every smooth-time product
pub const ZOOM_SMOOTHING_DIVISOR: f32 = 50.0; // pursuit constant = (zoom / this) * smooth
pub const ZOOM_RATE_SCALE: f32 = 50.0; // smooth-time multiplier for zoom/iteration keys
pub const PAN_RATE_SCALE: f32 = 5.0; // smooth-time multiplier for pan keys
pub const EXTENT_RATE_SCALE: f32 = 1.0; // smooth-time multiplier for extent keys
pub const SHRINK_FACTOR: f32 = 0.95;
pub const GROW_FACTOR: f32 = 1.05;
pub const EXTENT_MIN_FACTOR: f32 = 0.05; // keeps the orthographic extent positive

// Navigation bounds, every state value stays finite and positive
pub const ZOOM_MIN: f32 = 1.0e-6;
pub const ZOOM_MAX: f32 = 1.0e12;
pub const ITERATIONS_MIN: f32 = 1.0;
pub const ITERATIONS_MAX: f32 = 1.0e7;
pub const ORTHOGRAPHIC_EXTENT_MIN: f32 = 1.0e-6;
pub const ORTHOGRAPHIC_EXTENT_MAX: f32 = 1.0e12;

// Sphere tile layout
pub const DEFAULT_POINT_COUNT: i64 = 16;
pub const MAX_SPHERE_POINTS: i64 = 1 << 26; // ~800 MB of f32 points
pub const DEFAULT_SPHERE_SCALING: f32 = 32.0;
pub const DEFAULT_SPIN_SPEED_DEG: f32 = 7.0; // parent yaw, degrees per second
pub const TILE_ROTATION_DEGREES: Vec3 = Vec3::new(-90.0, 0.0, 0.0);

// Camera culling
pub const DEFAULT_LAYER_MASK: u32 = 1;

/// Labels for the sphere tiles, one per bird order.
pub const BIRD_ORDERS: [&str; 31] = [
    "Rheiformes",
    "Tinamiformes",
    "Anseriformes",
    "Galliformes",
    "Gaviiformes",
    "Podicipediformes",
    "Phoenicopteriformes",
    "Sphenisciformes",
    "Procellariiformes",
    "Phaethontiformes",
    "Ciconiiformes",
    "Suliformes",
    "Pelecaniformes",
    "Cathartiformes",
    "Accipitriformes",
    "Eurypygiformes",
    "Gruiformes",
    "Charadriiformes",
    "Columbiformes",
    "Opisthocomiformes",
    "Cuculiformes",
    "Strigiformes",
    "Caprimulgiformes",
    "Trogoniformes",
    "Coraciiformes",
    "Galbuliformes",
    "Piciformes",
    "Cariamiformes",
    "Falconiformes",
    "Psittaciformes",
    "Passeriformes",
];
