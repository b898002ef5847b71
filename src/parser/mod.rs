//! Text codecs for track specs and serialized track lists.

pub mod track_list;
pub mod track_spec;

pub use track_list::{decode_tracks, encode_tracks};
pub use track_spec::{decode, encode, normalize};
