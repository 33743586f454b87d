use fourier_engine_ffi::*;
use std::ptr;
use std::thread;

/// A handle shared between threads.
#[derive(Copy, Clone)]
struct SharedHandle(*mut Handle<f32>);

unsafe impl Send for SharedHandle {}

impl SharedHandle {
    fn get(self) -> *mut Handle<f32> {
        self.0
    }
}

#[test]
fn lifecycle_float() {
    unsafe {
        let state = fourier_engine_create_float();
        assert_eq!(fourier_engine_size_float(state), -1);

        assert_eq!(
            fourier_engine_initialize_float(state, 0),
            FourierStatus::InvalidLength
        );
        assert_eq!(fourier_engine_size_float(state), -1);

        assert_eq!(fourier_engine_initialize_float(state, 4), FourierStatus::Ok);
        assert_eq!(fourier_engine_size_float(state), 4);

        // an invalid length keeps the existing plans
        assert_eq!(
            fourier_engine_initialize_float(state, -3),
            FourierStatus::InvalidLength
        );
        assert_eq!(fourier_engine_size_float(state), 4);

        assert_eq!(fourier_engine_release_float(state), FourierStatus::Ok);
        assert_eq!(fourier_engine_size_float(state), -1);
        assert_eq!(fourier_engine_release_float(state), FourierStatus::Ok);

        fourier_engine_destroy_float(state);
    }
}

#[test]
fn allocating_transform_double() {
    unsafe {
        let state = fourier_engine_create_double();
        let input = [1., 0., 0., 0., 0., 0., 0., 0.];
        let mut output = ptr::null_mut();
        let mut output_len = 0;

        assert_eq!(
            fourier_engine_transform_double(
                state,
                input.as_ptr(),
                input.len(),
                0,
                &mut output,
                &mut output_len
            ),
            FourierStatus::NotInitialized
        );
        assert!(output.is_null());

        assert_eq!(fourier_engine_initialize_double(state, 4), FourierStatus::Ok);
        assert_eq!(
            fourier_engine_transform_double(
                state,
                input.as_ptr(),
                input.len(),
                0,
                &mut output,
                &mut output_len
            ),
            FourierStatus::Ok
        );
        assert_eq!(output_len, 8);
        assert_eq!(
            std::slice::from_raw_parts(output, output_len),
            &[1., 0., 1., 0., 1., 0., 1., 0.]
        );
        fourier_engine_free_samples_double(output, output_len);

        assert_eq!(
            fourier_engine_transform_double(
                state,
                input.as_ptr(),
                6,
                0,
                &mut output,
                &mut output_len
            ),
            FourierStatus::LengthMismatch
        );

        fourier_engine_destroy_double(state);
    }
}

#[test]
fn in_place_transform_float() {
    unsafe {
        let state = fourier_engine_create_float();
        assert_eq!(fourier_engine_initialize_float(state, 4), FourierStatus::Ok);

        let input = [1f32, 1., 1., 1., 1., 1., 1., 1.];
        let mut output = [f32::NAN; 8];
        assert_eq!(
            fourier_engine_transform_in_place_float(
                state,
                input.as_ptr(),
                input.len(),
                output.as_mut_ptr(),
                output.len(),
                1
            ),
            FourierStatus::Ok
        );
        assert_eq!(output, [4., 4., 0., 0., 0., 0., 0., 0.]);

        let mut short = [7f32; 6];
        assert_eq!(
            fourier_engine_transform_in_place_float(
                state,
                input.as_ptr(),
                input.len(),
                short.as_mut_ptr(),
                short.len(),
                1
            ),
            FourierStatus::LengthMismatch
        );
        assert_eq!(short, [7.; 6]);

        fourier_engine_destroy_float(state);
    }
}

#[test]
fn aliased_buffers() {
    unsafe {
        let state = fourier_engine_create_double();
        assert_eq!(fourier_engine_initialize_double(state, 3), FourierStatus::Ok);

        let input = [1., 2., 3., 4., 5., 6.];
        let mut expected = [0.; 6];
        assert_eq!(
            fourier_engine_transform_in_place_double(
                state,
                input.as_ptr(),
                6,
                expected.as_mut_ptr(),
                6,
                0
            ),
            FourierStatus::Ok
        );

        // same storage for input and output
        let mut buffer = input;
        let pointer = buffer.as_mut_ptr();
        assert_eq!(
            fourier_engine_transform_in_place_double(state, pointer, 6, pointer, 6, 0),
            FourierStatus::Ok
        );
        assert_eq!(buffer, expected);

        // partially overlapping storage
        let mut shifted = [0.; 8];
        shifted[2..].copy_from_slice(&input);
        let base = shifted.as_mut_ptr();
        assert_eq!(
            fourier_engine_transform_in_place_double(state, base.add(2), 6, base, 6, 0),
            FourierStatus::Ok
        );
        assert_eq!(&shifted[..6], &expected);

        fourier_engine_destroy_double(state);
    }
}

#[test]
fn null_pointers() {
    unsafe {
        let mut output = [0f32; 2];
        assert_eq!(
            fourier_engine_initialize_float(ptr::null_mut(), 4),
            FourierStatus::NullPointer
        );
        assert_eq!(fourier_engine_size_float(ptr::null()), -1);

        let state = fourier_engine_create_float();
        assert_eq!(fourier_engine_initialize_float(state, 1), FourierStatus::Ok);
        assert_eq!(
            fourier_engine_transform_in_place_float(
                state,
                ptr::null(),
                2,
                output.as_mut_ptr(),
                2,
                0
            ),
            FourierStatus::NullPointer
        );
        let input = [1f32, 2.];
        assert_eq!(
            fourier_engine_transform_in_place_float(
                state,
                input.as_ptr(),
                2,
                ptr::null_mut(),
                2,
                0
            ),
            FourierStatus::NullPointer
        );
        fourier_engine_destroy_float(state);
        fourier_engine_destroy_float(ptr::null_mut());
    }
}

#[test]
fn concurrent_transforms_and_reinitialization() {
    let state = SharedHandle(fourier_engine_create_float());
    unsafe {
        assert_eq!(fourier_engine_initialize_float(state.get(), 4), FourierStatus::Ok);
    }

    let writer = thread::spawn(move || {
        for i in 0..200 {
            let size = if i % 2 == 0 { 5 } else { 4 };
            let status = unsafe { fourier_engine_initialize_float(state.get(), size) };
            assert_eq!(status, FourierStatus::Ok);
        }
    });

    let readers = (0..4)
        .map(|reader| {
            thread::spawn(move || {
                for i in 0..500 {
                    // impulses of both lengths have flat spectra
                    let size = if (i + reader) % 2 == 0 { 4 } else { 5 };
                    let mut input = vec![0f32; 2 * size];
                    input[0] = 1.;
                    let mut output = vec![f32::NAN; 2 * size];
                    let status = unsafe {
                        fourier_engine_transform_in_place_float(
                            state.get(),
                            input.as_ptr(),
                            input.len(),
                            output.as_mut_ptr(),
                            output.len(),
                            0,
                        )
                    };
                    match status {
                        FourierStatus::Ok => {
                            let expected = (0..size)
                                .flat_map(|_| vec![1., 0.])
                                .collect::<Vec<f32>>();
                            assert_eq!(output, expected);
                        }
                        FourierStatus::LengthMismatch => {
                            assert!(output.iter().all(|x| x.is_nan()))
                        }
                        status => panic!("unexpected status {:?}", status),
                    }
                }
            })
        })
        .collect::<Vec<_>>();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    unsafe {
        assert_eq!(fourier_engine_size_float(state.get()), 4);
        fourier_engine_destroy_float(state.get());
    }
}
