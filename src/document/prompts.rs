//! Instruction text sent with each document type. Reproduced byte for byte:
//! the upstream model's output depends on it.

pub const DRIVER_LICENCE: &str = r#"
just read form the image Perform OCR on the uploaded arabic driving licence Extract the following fields from this driving licence (and insurance if present) and return JSON:
                                    - Name(arabic)
                                    - First name(arabic)  
                                    - Date of birth  
                                    - Address
                                    - Country  
                                    - National identification number 
                                    - Driving licence number  
                                    - Groups (A, B…)  
                                    - Valid until  
                                    - Insurance company
"#;

pub const CAR_PLATE: &str = r#"Perform OCR on the image.  
If a car plate is visible, extract and return only the license plate number as plain text.  
If no plate is found, return: "".
"#;

pub const CARTE_GRIS: &str = r#"
extract from image Carte Gris algeria this information i need correct answer: 
  plate
  "make
  "model
  "vin": 
  "first_registration": 
  "category": 
  "fiscal_power_cv": 
  "ptac_kg": 
  "color": 
  "certificate_number": 
  "owner_name": 
  "owner_address":
"#;
