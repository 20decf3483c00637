//! Session packet (id 1): track, session type, lap count, remaining time.

use super::cursor::Cursor;
use super::header::HEADER_SIZE;
use crate::Result;

/// Fixed wire size of the Session packet.
pub const SESSION_PACKET_SIZE: usize = 251;

const MARSHAL_ZONE_SIZE: usize = 5;
const MAX_MARSHAL_ZONES: usize = 21;
const FORECAST_SAMPLE_SIZE: usize = 5;

/// Parsed Session packet body.
///
/// Only the fields the session model consumes are retained; the marshal-zone
/// and weather-forecast tables are validated for length and skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPacket {
    pub weather: u8,
    pub track_temperature: i8,
    pub air_temperature: i8,
    pub total_laps: u8,
    pub track_length: u16,
    pub session_type: u8,
    pub track_id: i8,
    pub formula: u8,
    pub session_time_left: u16,
    pub session_duration: u16,
    pub pit_speed_limit: u8,
    pub game_paused: u8,
    pub is_spectating: u8,
    pub spectator_car_index: u8,
    pub safety_car_status: u8,
    pub network_game: u8,
}

impl SessionPacket {
    /// Parse the body following the packet header.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let mut c = Cursor::at(raw, HEADER_SIZE, "session packet");
        let weather = c.u8()?;
        let track_temperature = c.i8()?;
        let air_temperature = c.i8()?;
        let total_laps = c.u8()?;
        let track_length = c.u16_le()?;
        let session_type = c.u8()?;
        let track_id = c.i8()?;
        let formula = c.u8()?;
        let session_time_left = c.u16_le()?;
        let session_duration = c.u16_le()?;
        let pit_speed_limit = c.u8()?;
        let game_paused = c.u8()?;
        let is_spectating = c.u8()?;
        let spectator_car_index = c.u8()?;
        c.skip(1)?; // sliProNativeSupport
        c.skip(1)?; // numMarshalZones
        c.skip(MAX_MARSHAL_ZONES * MARSHAL_ZONE_SIZE)?;
        let safety_car_status = c.u8()?;
        let network_game = c.u8()?;
        c.skip(1)?; // numWeatherForecastSamples
        c.skip(20 * FORECAST_SAMPLE_SIZE)?;

        Ok(Self {
            weather,
            track_temperature,
            air_temperature,
            total_laps,
            track_length,
            session_type,
            track_id,
            formula,
            session_time_left,
            session_duration,
            pit_speed_limit,
            game_paused,
            is_spectating,
            spectator_car_index,
            safety_car_status,
            network_game,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testutil::session_packet_bytes;

    #[test]
    fn parses_core_session_fields() {
        let raw = session_packet_bytes(17, 10, 10, 3600);
        let session = SessionPacket::parse(&raw).unwrap();
        assert_eq!(session.track_id, 17);
        assert_eq!(session.session_type, 10);
        assert_eq!(session.total_laps, 10);
        assert_eq!(session.session_time_left, 3600);
    }

    #[test]
    fn rejects_truncated_body() {
        let raw = session_packet_bytes(17, 10, 10, 3600);
        assert!(SessionPacket::parse(&raw[..100]).is_err());
    }
}
