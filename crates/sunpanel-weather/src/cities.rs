//! Cities offered by the dashboard's city picker.

use crate::types::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.latitude,
            lon: self.longitude,
        }
    }
}

const fn city(name: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        name,
        latitude,
        longitude,
    }
}

/// Metro cities first, then other major cities, then popular destinations.
pub const CITIES: &[City] = &[
    city("Mumbai", 19.0760, 72.8777),
    city("Delhi", 28.7041, 77.1025),
    city("Bangalore", 12.9716, 77.5946),
    city("Hyderabad", 17.3850, 78.4867),
    city("Chennai", 13.0827, 80.2707),
    city("Kolkata", 22.5726, 88.3639),
    city("Pune", 18.5204, 73.8567),
    city("Ahmedabad", 23.0225, 72.5714),
    city("Jaipur", 26.9124, 75.7873),
    city("Surat", 21.1702, 72.8311),
    city("Lucknow", 26.8467, 80.9462),
    city("Kanpur", 26.4499, 80.3319),
    city("Nagpur", 21.1458, 79.0882),
    city("Indore", 22.7196, 75.8577),
    city("Thane", 19.2183, 72.9781),
    city("Bhopal", 23.2599, 77.4126),
    city("Visakhapatnam", 17.6868, 83.2185),
    city("Pimpri-Chinchwad", 18.6298, 73.7997),
    city("Patna", 25.5941, 85.1376),
    city("Vadodara", 22.3072, 73.1812),
    city("Kochi", 9.9312, 76.2673),
    city("Coimbatore", 11.0168, 76.9558),
    city("Madurai", 9.9252, 78.1198),
    city("Thiruvananthapuram", 8.5241, 76.9366),
    city("Mysore", 12.2958, 76.6394),
    city("Mangalore", 12.9141, 74.8560),
    city("Guwahati", 26.1445, 91.7362),
    city("Chandigarh", 30.7333, 76.7794),
    city("Dehradun", 30.3165, 78.0322),
    city("Shimla", 31.1048, 77.1734),
    city("Agra", 27.1767, 78.0081),
    city("Varanasi", 25.3176, 82.9739),
    city("Amritsar", 31.6340, 74.8723),
    city("Jodhpur", 26.2389, 73.0243),
    city("Udaipur", 24.5854, 73.7125),
    city("Ranchi", 23.3441, 85.3096),
    city("Bhubaneswar", 20.2961, 85.8245),
    city("Cuttack", 20.4625, 85.8828),
    city("Raipur", 21.2514, 81.6296),
    city("Jabalpur", 23.1815, 79.9864),
    city("Gwalior", 26.2183, 78.1828),
    city("Aurangabad", 19.8762, 75.3433),
    city("Nashik", 19.9975, 73.7898),
    city("Rajkot", 22.3039, 70.8022),
    city("Jammu", 32.7266, 74.8570),
    city("Srinagar", 34.0837, 74.7973),
];

/// Find a city by its exact display name.
pub fn find_city(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.name == name)
}

pub fn city_names() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|c| c.name)
}
