use std::fmt;

/// A characteristic the driver knows how to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// 1 byte, 0 = off, 1 = on
    Power,
    /// 1 byte, 1..=254
    Brightness,
    /// little-endian u16 mirek
    Temperature,
    /// little-endian u16 x, u16 y, each scaled by 65535
    Color,
    /// ASCII model number (standard Model Number String characteristic)
    Model,
    /// ASCII friendly name
    Name,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::Power,
        Endpoint::Brightness,
        Endpoint::Temperature,
        Endpoint::Color,
        Endpoint::Model,
        Endpoint::Name,
    ];

    pub const fn uuid(self) -> &'static str {
        match self {
            Endpoint::Power => "932c32bd-0002-47a2-835a-a8d455b859dd",
            Endpoint::Brightness => "932c32bd-0003-47a2-835a-a8d455b859dd",
            Endpoint::Temperature => "932c32bd-0004-47a2-835a-a8d455b859dd",
            Endpoint::Color => "932c32bd-0005-47a2-835a-a8d455b859dd",
            Endpoint::Model => "00002a24-0000-1000-8000-00805f9b34fb",
            Endpoint::Name => "97fe6561-0003-4f62-86e9-b71ee2da3d22",
        }
    }

    pub fn from_uuid(uuid: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.uuid().eq_ignore_ascii_case(uuid))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Endpoint::Power => "power",
            Endpoint::Brightness => "brightness",
            Endpoint::Temperature => "temperature",
            Endpoint::Color => "color",
            Endpoint::Model => "model",
            Endpoint::Name => "name",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
