mod capacity;
mod host_count;
mod meetings;
mod occupancy;
mod pairing;
