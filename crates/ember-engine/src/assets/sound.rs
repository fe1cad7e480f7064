/// A playable sound handle supplied by the audio collaborator.
///
/// The engine never decodes audio; it only adjusts and observes playback
/// through this contract. Implementations wrap whatever the host's sound
/// backend hands out.
pub trait AudioClip: Send {
    /// Adjusts playback gain in decibels. `0.0` is nominal; spatial
    /// emitters pass negative values as the listener moves away.
    fn set_gain_db(&mut self, db: f32);

    /// Restarts playback from the first frame.
    fn restart(&mut self);

    /// Whether the clip is currently producing audio.
    fn is_running(&self) -> bool;

    /// Releases the underlying resource. Irreversible.
    fn close(&mut self);
}
