pub mod trip_io;
