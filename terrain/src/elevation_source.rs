//! Where profile elevations come from.

use crate::{TerrainError, C};
use geo::geometry::Coord;
use openelev::Client;

/// A batch elevation lookup.
///
/// Implementations must return exactly one elevation (meters) per
/// coordinate, in the order given.
pub trait ElevationSource {
    fn elevations(&self, coords: &[Coord<C>]) -> Result<Vec<C>, TerrainError>;
}

impl ElevationSource for Client {
    fn elevations(&self, coords: &[Coord<C>]) -> Result<Vec<C>, TerrainError> {
        Ok(Client::elevations(self, coords)?)
    }
}

#[cfg(test)]
mod tests {
    use super::ElevationSource;
    use crate::TerrainError;
    use geo::geometry::Coord;
    use openelev::{Client, DEFAULT_TIMEOUT};

    #[test]
    fn test_client_errors_become_terrain_errors() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", "/lookup").with_status(500).create();

        let client = Client::new(&format!("{}/lookup", server.url()), DEFAULT_TIMEOUT).unwrap();
        let source: &dyn ElevationSource = &client;
        let err = source
            .elevations(&[Coord { x: 24.374457, y: 52.189834 }])
            .unwrap_err();
        assert!(matches!(err, TerrainError::OpenElev(_)), "{err:?}");
    }
}
