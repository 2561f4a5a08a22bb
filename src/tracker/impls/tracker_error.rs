use crate::bencode::enums::bencode_value::BencodeValue;
use crate::tracker::enums::tracker_error::TrackerError;

impl TrackerError {
    pub fn code(&self) -> i64
    {
        match self {
            TrackerError::InvalidRequestType => 100,
            TrackerError::MissingInfoHash => 101,
            TrackerError::MissingPeerId => 102,
            TrackerError::MissingPort => 103,
            TrackerError::InvalidPort => 103,
            TrackerError::InvalidInfoHash => 150,
            TrackerError::InvalidPeerId => 151,
            TrackerError::InvalidNumwant => 152,
            TrackerError::Generic => 900
        }
    }

    /// The `{"failure code", "failure reason"}` dictionary sent to the client.
    pub fn to_bencode(&self) -> BencodeValue
    {
        let mut response = BencodeValue::dictionary();
        response.insert("failure code", self.code());
        response.insert("failure reason", self.to_string());
        response
    }
}
